use serde::{Deserialize, Serialize};

/// Incoming chat request.
///
/// Parsed leniently: a body that is not JSON, or whose `message` is not a
/// string, yields an empty message so the caller can reject it uniformly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatRequestBody {
    pub message: String,
    #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatRequestBody {
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) else {
            return Self::default();
        };
        let text = |key: &str| value.get(key).and_then(serde_json::Value::as_str).map(str::to_owned);
        Self { message: text("message").unwrap_or_default(), session_id: text("sessionId") }
    }

    /// The message with surrounding whitespace removed, or `None` when blank.
    #[must_use]
    pub fn trimmed_message(&self) -> Option<&str> {
        let trimmed = self.message.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Chat reply sent back to the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
}

impl ChatReply {
    #[must_use]
    pub fn answered(reply: String) -> Self {
        Self { reply, cached: Some(false), error: None }
    }

    #[must_use]
    pub fn failed(reply: String) -> Self {
        Self { reply, cached: None, error: Some(true) }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.unwrap_or(false)
    }
}

/// Answer of the chat status check. Never carries the token itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatStatus {
    pub ok: bool,
    #[serde(rename = "tokenPresent")]
    pub token_present: bool,
    pub provider: String,
}
