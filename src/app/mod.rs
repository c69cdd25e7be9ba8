use std::{net::SocketAddr, sync::Arc};

use axum::http::HeaderValue;
use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::AppConfig,
    database::DbManager,
    store::{PgWaitlistStore, WaitlistStore},
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
    /// Origin allowed to make cross-origin requests, CORS is disabled when `None`.
    pub allowed_origin: Option<HeaderValue>,
}

impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
            allowed_origin: None,
        }
    }

    pub fn with_allowed_origin(mut self, allowed_origin: HeaderValue) -> Self {
        self.allowed_origin = Some(allowed_origin);
        self
    }

    /// Connects to Postgres, runs the migrations and binds the configured address.
    pub async fn build_from_config(config: &AppConfig) -> Result<Self> {
        let dm = DbManager::init(config).await?;
        dm.migrate().await?;
        let app_state = AppState::new(Arc::new(PgWaitlistStore::new(dm)));

        let addr = SocketAddr::from((config.net_config.host, config.net_config.app_port));
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let mut app = App::new(app_state, listener);
        if let Some(origin) = &config.net_config.allowed_origin {
            app = app.with_allowed_origin(HeaderValue::from_str(origin)?);
        }

        Ok(app)
    }
}

pub struct InternalState {
    pub store: Arc<dyn WaitlistStore>,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(store: Arc<dyn WaitlistStore>) -> Self {
        AppState(Arc::new(InternalState { store }))
    }
}
