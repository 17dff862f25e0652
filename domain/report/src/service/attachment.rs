use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    command::SaveAttachmentCommand,
    exception::ReportResult,
    model::{entity::ReportAttachment, vo::Actor},
};

/// An attachment together with the location of its content.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentFile {
    pub attachment: ReportAttachment,
    pub path: PathBuf,
}

/// # Attachment store
///
/// Files live under `<upload-root>/attachments/<report-id>/`, their metadata in the storage.
#[async_trait]
pub trait AttachmentService: Send + Sync {
    /// Write the upload to disk, then record it. The file is removed again if recording fails.
    async fn save(&self, command: SaveAttachmentCommand) -> ReportResult<ReportAttachment>;

    /// Get an attachment of a report, `NotFound` if it belongs to another one.
    async fn get(&self, report_id: i64, attachment_id: i64) -> ReportResult<ReportAttachment>;

    /// Scope the actor to the report, then locate the attachment for download.
    async fn open(
        &self,
        report_id: i64,
        actor: Actor,
        attachment_id: i64,
    ) -> ReportResult<AttachmentFile>;

    /// Delete an attachment; refused once the report is `done`.
    async fn delete(
        &self,
        report_id: i64,
        teknisi_id: i64,
        attachment_id: i64,
    ) -> ReportResult<()>;
}
