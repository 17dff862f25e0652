use architecture::{model::AggregateRoot, repository::DbField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ReportAttachment, ReportPhoto};
use crate::model::vo::ReportStatus;

/// # Service report
///
/// One field-service job, from creation by an administrator to completion by the assigned
/// technician.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceReport {
    pub id: i64,
    /// Human readable unique number, generated at creation.
    pub dispatch_no: String,
    /// Creator, never changes.
    pub admin_id: i64,
    /// Assigned technician, set by assignment and never cleared.
    pub teknisi_id: Option<i64>,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_contact: String,
    pub device_name: String,
    pub serial_number: String,
    pub device_location: String,
    pub complaint: String,
    pub action_taken: String,
    pub status: ReportStatus,
    pub opened_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set iff the status is `done`.
    pub completed_at: Option<DateTime<Utc>>,
    /// Admin authored form.
    pub form_payload: Value,
    /// Technician authored form.
    pub teknisi_payload: Option<Value>,
    #[serde(default)]
    pub photos: Vec<ReportPhoto>,
    #[serde(default)]
    pub attachments: Vec<ReportAttachment>,
}

impl AggregateRoot for ServiceReport {}

impl ServiceReport {
    pub fn is_assigned_to(&self, teknisi_id: i64) -> bool {
        self.teknisi_id == Some(teknisi_id)
    }
}

/// Partial update of a [`ServiceReport`], `id` locates the row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DbServiceReport {
    pub id: DbField<i64>,
    pub teknisi_id: DbField<Option<i64>>,
    pub action_taken: DbField<String>,
    pub status: DbField<ReportStatus>,
    pub updated_at: DbField<DateTime<Utc>>,
    pub completed_at: DbField<Option<DateTime<Utc>>>,
    pub form_payload: DbField<Value>,
    pub teknisi_payload: DbField<Option<Value>>,
}
