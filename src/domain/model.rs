use serde::{Deserialize, Serialize};
use serde_json::Value;

const MISSING_FIELD: &str = "<missing>";

/// A contact-form submission as sent by the portfolio page.
///
/// Every field is optional: the endpoint accepts whatever the client sends
/// and never rejects a submission for a missing or oddly typed field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Builds a submission from an arbitrary JSON body.
    ///
    /// Strings are taken verbatim, `null` or absent fields become `None`, and
    /// any other value is kept as its compact JSON text. A body that is not an
    /// object yields an empty submission.
    pub fn from_json(body: &Value) -> Self {
        let Some(fields) = body.as_object() else {
            return Self::default();
        };

        Self {
            name: fields.get("name").and_then(lenient_text),
            email: fields.get("email").and_then(lenient_text),
            message: fields.get("message").and_then(lenient_text),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(MISSING_FIELD)
    }

    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or(MISSING_FIELD)
    }
}

fn lenient_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Fixed acknowledgment returned for every submission that reaches the handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub const RECEIVED_MESSAGE: &'static str = "Message received!";

    pub fn received() -> Self {
        Self {
            success: true,
            message: Self::RECEIVED_MESSAGE.to_string(),
        }
    }
}
