use crate::core::markup::escape_html;

/// Placeholder credentials used when no settings file overrides them.
pub const DEFAULT_API_TOKEN: &str = "API_TOKEN";
pub const DEFAULT_CHAT_ID: &str = "CHAT_ID";
pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Telegram parse mode matching the escaping applied by [`Message::from_raw`].
pub const PARSE_MODE: &str = "HTML";

/// Message text ready for `parse_mode=HTML`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn from_raw(raw: &str) -> Self {
        Self {
            text: escape_html(raw),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub chat_id: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            token: DEFAULT_API_TOKEN.to_string(),
            chat_id: DEFAULT_CHAT_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    Delivered,
    /// Any non-200 response; `body` is the raw response text.
    Failed { status: u16, body: String },
}

impl DeliveryResult {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryResult::Delivered)
    }

    /// The single line printed to stdout for this outcome.
    pub fn report_line(&self) -> String {
        match self {
            DeliveryResult::Delivered => "✅ Message sent.".to_string(),
            DeliveryResult::Failed { body, .. } => format!("❌ Failed to send message: {}", body),
        }
    }
}
