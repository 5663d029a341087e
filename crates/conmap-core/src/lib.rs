pub mod app_config;
pub mod cities;
pub mod config;
pub mod geo;

use thiserror::Error;

pub use app_config::AppConfig;
pub use cities::{load_cities, search_cities, City, RecenterTarget};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{Category, CircleStyle, GeoBounds, StorePoint};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read cities file {path}: {source}")]
    CitiesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cities file: {0}")]
    CitiesFileParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
