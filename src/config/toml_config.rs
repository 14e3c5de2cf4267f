use crate::domain::model::{Credentials, DEFAULT_API_BASE, DEFAULT_API_TOKEN, DEFAULT_CHAT_ID};
use crate::utils::error::{NotifyError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default)]
    pub telegram: TelegramConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_token")]
    pub token: String,
    #[serde(default = "default_chat_id")]
    pub chat_id: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_token() -> String {
    DEFAULT_API_TOKEN.to_string()
}

fn default_chat_id() -> String {
    DEFAULT_CHAT_ID.to_string()
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: default_token(),
            chat_id: default_chat_id(),
        }
    }
}

impl TelegramConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            token: self.token.clone(),
            chat_id: self.chat_id.clone(),
        }
    }
}

impl NotifyConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| NotifyError::file(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.substitute_env_vars()?;
        Ok(config)
    }

    /// Replace `${VAR}` in the parsed string fields with the environment value;
    /// unset variables are left as-is.
    fn substitute_env_vars(&mut self) -> Result<()> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NotifyError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let telegram = &mut self.telegram;
        for field in [
            &mut telegram.api_base,
            &mut telegram.token,
            &mut telegram.chat_id,
        ] {
            let replaced = re.replace_all(field.as_str(), |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            });
            *field = replaced.into_owned();
        }

        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        let telegram = &self.telegram;

        validation::validate_url("telegram.api_base", &telegram.api_base)?;

        validation::validate_resolved("telegram.token", &telegram.token)?;
        validation::validate_non_empty_string("telegram.token", &telegram.token)?;

        validation::validate_resolved("telegram.chat_id", &telegram.chat_id)?;
        validation::validate_non_empty_string("telegram.chat_id", &telegram.chat_id)?;

        Ok(())
    }
}

impl Validate for NotifyConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
