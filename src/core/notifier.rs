use crate::config::toml_config::TelegramConfig;
use crate::domain::model::{Credentials, DeliveryResult, Message, PARSE_MODE};
use crate::utils::error::{NotifyError, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::path::Path;

/// Error payload the Bot API returns alongside non-200 statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error_code: Option<i64>,
    description: Option<String>,
}

pub struct Notifier {
    client: Client,
    api_base: String,
    credentials: Credentials,
}

impl Notifier {
    pub fn new(api_base: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            credentials,
        }
    }

    pub fn from_config(config: &TelegramConfig) -> Self {
        Self::new(config.api_base.clone(), config.credentials())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base.trim_end_matches('/'),
            self.credentials.token
        )
    }

    fn redacted_endpoint(&self) -> String {
        format!("{}/bot***/sendMessage", self.api_base.trim_end_matches('/'))
    }

    /// Read `file_path`, escape it and send it as one message.
    ///
    /// A read failure returns before any request is made.
    pub async fn send(&self, file_path: impl AsRef<Path>) -> Result<DeliveryResult> {
        let path = file_path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| NotifyError::file(path, e))?;

        tracing::debug!("Read {} bytes from {}", raw.len(), path.display());

        let message = Message::from_raw(&raw);
        self.deliver(&message).await
    }

    /// Send an already escaped message. Only transport failures are errors;
    /// a non-200 status comes back as [`DeliveryResult::Failed`].
    pub async fn deliver(&self, message: &Message) -> Result<DeliveryResult> {
        let params = [
            ("chat_id", self.credentials.chat_id.as_str()),
            ("text", message.text()),
            ("parse_mode", PARSE_MODE),
        ];

        let redacted = self.redacted_endpoint();
        tracing::debug!("Making API request to: {}", redacted);
        let response = self
            .client
            .post(self.endpoint())
            .form(&params)
            .send()
            .await
            .map_err(|e| NotifyError::transport(&redacted, e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::OK {
            return Ok(DeliveryResult::Delivered);
        }

        let body = response
            .text()
            .await
            .map_err(|e| NotifyError::transport(&redacted, e))?;
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(ApiErrorBody {
                error_code,
                description: Some(description),
            }) => tracing::warn!(
                "Telegram rejected the message (status {}, error_code {:?}): {}",
                status,
                error_code,
                description
            ),
            _ => tracing::warn!("Telegram rejected the message with status {}", status),
        }

        Ok(DeliveryResult::Failed {
            status: status.as_u16(),
            body,
        })
    }
}
