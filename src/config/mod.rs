pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;
use toml_config::NotifyConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "tg-notify")]
#[command(about = "Send the contents of a text file to a Telegram chat")]
pub struct CliConfig {
    /// File whose contents are sent as the message
    pub file: PathBuf,

    /// Optional TOML settings file ([telegram] api_base, token, chat_id)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Settings from `--config`, or the compiled-in defaults when absent.
    pub fn load_settings(&self) -> Result<NotifyConfig> {
        let settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading settings from: {}", path.display());
                NotifyConfig::from_file(path)?
            }
            None => NotifyConfig::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("file", &self.file.to_string_lossy())?;
        if let Some(config) = &self.config {
            validation::validate_path("config", &config.to_string_lossy())?;
        }
        Ok(())
    }
}
