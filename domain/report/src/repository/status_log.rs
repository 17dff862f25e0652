use architecture::repository::DBRepository;
use async_trait::async_trait;

use crate::model::entity::StatusLog;

#[async_trait]
pub trait StatusLogRepo: DBRepository<StatusLog> + Send + Sync {
    /// Logs of a report in creation order.
    async fn get_all_by_report(&self, report_id: i64) -> anyhow::Result<Vec<StatusLog>>;
}
