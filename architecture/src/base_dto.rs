use serde::{Deserialize, Serialize};

/// Wrapper of every response body.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBase<T> {
    /// Status code.
    pub status: i32,
    /// Error message, `Ok` on success.
    pub message: String,
    /// Content.
    pub content: Option<T>,
}

impl<T> ResponseBase<T> {
    pub fn new(status: i32, message: &str, content: Option<T>) -> Self {
        Self {
            status,
            message: message.to_string(),
            content,
        }
    }

    pub fn ok(content: Option<T>) -> Self {
        Self::new(200, "Ok", content)
    }

    pub fn created(content: Option<T>) -> Self {
        Self::new(201, "Created", content)
    }

    pub fn err(status: i32, message: &str) -> Self {
        Self::new(status, message, None)
    }
}
