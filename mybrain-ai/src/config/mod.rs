pub mod defaults;
pub mod error;
pub mod loader;
pub mod settings;

pub use crate::constants::CONFIG_PATH;
pub use error::ConfigError;
pub use settings::{AiSettings, ProviderSettings};
