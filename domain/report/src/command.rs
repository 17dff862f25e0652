use serde::Deserialize;
use serde_json::Value;
use tokio::io::AsyncRead;

use crate::model::vo::ProgressStatus;

/// Customer section of a new report.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub contact: String,
}

/// Device section of a new report.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub serial: String,
    pub location: String,
}

/// Create a report, issued by an administrator.
#[derive(Debug, Clone)]
pub struct CreateReportCommand {
    pub admin_id: i64,
    pub customer: CustomerInfo,
    pub device: DeviceInfo,
    pub complaint: String,
    pub form_payload: Value,
}

/// Technician progress update.
#[derive(Debug, Clone)]
pub struct UpdateProgressCommand {
    pub report_id: i64,
    pub teknisi_id: i64,
    pub status: ProgressStatus,
    pub job_summary: String,
    pub action_taken: String,
}

/// Upload of an attachment by the assigned technician.
pub struct SaveAttachmentCommand {
    pub report_id: i64,
    pub teknisi_id: i64,
    pub original_name: String,
    pub content_type: String,
    /// Declared size in bytes.
    pub size: i64,
    pub content: Box<dyn AsyncRead + Send + Unpin>,
}

impl std::fmt::Debug for SaveAttachmentCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveAttachmentCommand")
            .field("report_id", &self.report_id)
            .field("teknisi_id", &self.teknisi_id)
            .field("original_name", &self.original_name)
            .field("content_type", &self.content_type)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
