use architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::{
    entity::{DbServiceReport, ServiceReport},
    vo::ListFilter,
};

#[async_trait]
pub trait ReportRepo: DBRepository<ServiceReport> + Send + Sync {
    /// Insert outside the unit of work and return the generated id.
    async fn insert_immediately(&self, entity: &ServiceReport) -> anyhow::Result<i64>;

    /// Buffer a partial update.
    async fn update(&self, entity: DbServiceReport) -> anyhow::Result<()>;

    /// Get a report with its photos and attachments loaded.
    async fn get_with_media(&self, id: i64) -> anyhow::Result<Option<ServiceReport>>;

    /// Reports matching `filter`, newest `opened_at` first, at most `limit` of them.
    async fn get_all_by_filter(
        &self,
        filter: &ListFilter,
        limit: u64,
    ) -> anyhow::Result<Vec<ServiceReport>>;

    /// Reports assigned to `teknisi_id`, newest `opened_at` first.
    async fn get_all_by_teknisi(&self, teknisi_id: i64) -> anyhow::Result<Vec<ServiceReport>>;
}
