use architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::entity::ReportAttachment;

#[async_trait]
pub trait ReportAttachmentRepo: DBRepository<ReportAttachment> + Send + Sync {
    /// Insert outside the unit of work and return the generated id.
    async fn insert_immediately(&self, entity: &ReportAttachment) -> anyhow::Result<i64>;

    /// Get an attachment only if it belongs to `report_id`.
    async fn get_by_report_and_id(
        &self,
        report_id: i64,
        id: i64,
    ) -> anyhow::Result<Option<ReportAttachment>>;
}
