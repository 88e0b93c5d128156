use serde::Serialize;

/// JSON envelope for responses that report an outcome rather than data.
///
/// Every failure leaving the API, whether produced by a handler or by the
/// auth gate, is rendered through this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
    /// Stable machine-readable failure code, e.g. `EXPIRED_TOKEN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }
}
