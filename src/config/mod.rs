/// Backend API configuration from config.toml and the environment
pub mod api;

pub use api::{ApiConfig, load_app_configuration};
