pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::NotifyConfig, CliConfig};
pub use crate::core::{markup::escape_html, notifier::Notifier};
pub use domain::model::{Credentials, DeliveryResult, Message};
pub use utils::error::{NotifyError, Result};
