use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file uploaded by the technician for a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportAttachment {
    pub id: i64,
    pub report_id: i64,
    /// Path relative to the upload root.
    pub file_path: String,
    /// Sanitized original file name, used when the file is downloaded.
    pub file_name: String,
    pub content_type: String,
    pub size: i64,
    pub created_at: DateTime<Utc>,
}

impl AggregateRoot for ReportAttachment {}
