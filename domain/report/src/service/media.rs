use async_trait::async_trait;
use serde_json::Value;

use crate::model::vo::{Extraction, ReportStatus};

/// Moves inline `data:image/...;base64,` values of known payload fields to durable storage and
/// replaces them by their public path.
///
/// Never fails: unprocessable fields are left as they are and reported.
#[async_trait]
pub trait MediaExtractorService: Send + Sync {
    /// Extract images of a payload; anything but a JSON object comes back unchanged.
    async fn extract(&self, report_id: i64, status: ReportStatus, payload: Value) -> Extraction;
}
