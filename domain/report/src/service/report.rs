use async_trait::async_trait;
use serde_json::Value;

use crate::{
    command::{CreateReportCommand, UpdateProgressCommand},
    exception::ReportResult,
    model::{
        entity::{ServiceReport, StatusLog},
        vo::{Actor, ListFilter},
    },
};

/// # Report lifecycle
///
/// Owns the status state machine `open -> progress -> done`, technician assignment and the
/// status log trail. Every status transition appends exactly one status log, committed together
/// with the report change.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Create an `open` report and move inline images of its form payload to storage.
    ///
    /// Failing to rewrite the form payload doesn't fail the creation.
    async fn create(&self, command: CreateReportCommand) -> ReportResult<ServiceReport>;

    /// Administrative listing, newest first and bounded.
    async fn list(&self, filter: ListFilter) -> ReportResult<Vec<ServiceReport>>;

    /// Reports assigned to a technician, newest first.
    async fn list_assigned(&self, teknisi_id: i64) -> ReportResult<Vec<ServiceReport>>;

    /// Get a report with photos and attachments.
    async fn get_by_id(&self, id: i64) -> ReportResult<ServiceReport>;

    /// Like `get_by_id`, but `Forbidden` when the report isn't assigned to `teknisi_id`.
    async fn get_for_technician(&self, id: i64, teknisi_id: i64) -> ReportResult<ServiceReport>;

    /// Administrators see any report, technicians only their own.
    async fn get_for_actor(&self, id: i64, actor: Actor) -> ReportResult<ServiceReport>;

    /// Status transitions of a report, oldest first.
    async fn status_history(&self, id: i64, actor: Actor) -> ReportResult<Vec<StatusLog>>;

    /// Store the technician form, moving its inline images according to the current status.
    async fn save_technician_payload(
        &self,
        id: i64,
        teknisi_id: i64,
        payload: Value,
    ) -> ReportResult<ServiceReport>;

    /// Assign a technician; an `open` report moves to `progress`.
    async fn assign(
        &self,
        report_id: i64,
        teknisi_id: i64,
        admin_id: i64,
    ) -> ReportResult<ServiceReport>;

    /// Technician progress update, `done` stamps the completion time.
    async fn update_progress(&self, command: UpdateProgressCommand)
        -> ReportResult<ServiceReport>;
}
