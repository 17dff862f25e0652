use architecture::model::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::vo::ReportStatus;

/// One status transition of a report. Append only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLog {
    pub id: i64,
    pub report_id: i64,
    /// Actor who made the change.
    pub changed_by: i64,
    pub from: ReportStatus,
    pub to: ReportStatus,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl AggregateRoot for StatusLog {}

impl StatusLog {
    /// A log entry not yet stored, its id is given by the storage.
    pub fn transition(
        report_id: i64,
        changed_by: i64,
        from: ReportStatus,
        to: ReportStatus,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            report_id,
            changed_by,
            from,
            to,
            note: note.into(),
            created_at: Utc::now(),
        }
    }
}
