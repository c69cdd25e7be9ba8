//! Tries to create an `AppConfig` from config files and the environment.
//! Layers `config/base.toml`, `config/{environment}.toml` and `APP_*` environment variables,
//! in that order, using `figment`.
//! Gets initialized with `OnceLock` so it only needs to get initialized once.

mod error;
mod structs;

use std::{path::Path, sync::OnceLock};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use tracing::info;

// Re-export config structs
pub use error::{ConfigError, ConfigResult};
pub use structs::{AppConfig, DbConfig, Environment, NetConfig, SslRequire};

/// Allocates a static `OnceLock` containing `AppConfig`.
/// This ensures configuration only gets initialized the first time we call this function.
/// Every other caller gets a &'static ref to AppConfig.
/// Panics if anything goes wrong.
pub fn get_or_init_config() -> &'static AppConfig {
    static CONFIG_INIT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG_INIT.get_or_init(|| {
        info!("{:<20} - Initializing the configuration", "get_or_init_config");
        load_config().unwrap_or_else(|er| panic!("Fatal Error: Building config: {er}"))
    })
}

/// Builds a fresh `AppConfig` from the `config` directory in the current working directory.
pub fn load_config() -> ConfigResult<AppConfig> {
    let base_path = std::env::current_dir()?;
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;

    let mut config = load_config_from(&base_path.join("config"), &environment)?;

    // Setup DbConfig for production
    if matches!(environment, Environment::Production) {
        if let Ok(production_db) = std::env::var("DATABASE_URL") {
            config.db_config = DbConfig::try_from(production_db.as_str())?;
        }
    }

    Ok(config)
}

/// Merges the base file, the environment file and `APP_` prefixed environment variables.
/// Nested keys are separated with a double underscore: `APP_NET_CONFIG__APP_PORT=9000`.
pub fn load_config_from(config_dir: &Path, environment: &Environment) -> ConfigResult<AppConfig> {
    let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

    let config = Figment::new()
        .merge(Toml::file(config_dir.join("base.toml")))
        .merge(Toml::file(config_dir.join(environment_filename)))
        .merge(Env::prefixed("APP_").split("__"))
        .extract()?;

    Ok(config)
}
