use serde_json::Value;

/// Result of running the media extractor over a payload.
///
/// The payload is always usable: fields that could not be processed are left as they were
/// and reported in `failures`.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub payload: Value,
    pub failures: Vec<FieldFailure>,
}

impl Extraction {
    pub fn untouched(payload: Value) -> Self {
        Self {
            payload,
            failures: vec![],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A field the extractor had to leave unprocessed.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    /// Payload key.
    pub field: String,
    /// 1-based position for array fields.
    pub index: Option<usize>,
    pub reason: String,
}
