pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::DatasetConfig;
pub use crate::core::{loader::DatasetLoader, prompt::FilterPrompt, session::Session};
pub use crate::utils::error::{BikeshareError, Result};
