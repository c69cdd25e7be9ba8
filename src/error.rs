use crate::{config, database, store, web};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database error: {0}")]
    Database(#[from] database::Error),
    #[error("store error: {0}")]
    Store(#[from] store::StoreError),
    #[error("web error: {0}")]
    Web(#[from] web::Error),

    #[error("invalid allowed origin: {0}")]
    AllowedOrigin(#[from] axum::http::header::InvalidHeaderValue),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
