use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_report::{model::entity::StatusLog, repository::StatusLogRepo};
use sea_orm::{prelude::*, QueryFilter, QueryOrder, QueryTrait};

use crate::infrastructure::database::{model::prelude::*, OrmRepo};

#[async_trait]
impl ReadOnlyRepository<StatusLog> for OrmRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<StatusLog>> {
        StatusLogEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(StatusLog::try_from)
            .transpose()
    }
}

#[async_trait]
impl MutableRepository<StatusLog> for OrmRepo {
    async fn insert(&self, entity: &StatusLog) -> anyhow::Result<()> {
        let stmt = StatusLogEntity::insert(StatusLogActiveModel::from(entity)).build(self.backend());
        self.push(stmt).await;
        Ok(())
    }

    /// Status logs are append only.
    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        anyhow::bail!("Status log {id} can't be deleted")
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<StatusLog> for OrmRepo {}

#[async_trait]
impl StatusLogRepo for OrmRepo {
    async fn get_all_by_report(&self, report_id: i64) -> anyhow::Result<Vec<StatusLog>> {
        StatusLogEntity::find()
            .filter(StatusLogColumn::ReportId.eq(report_id))
            .order_by_asc(StatusLogColumn::CreatedAt)
            .order_by_asc(StatusLogColumn::Id)
            .all(self.db.get_connection())
            .await?
            .into_iter()
            .map(StatusLog::try_from)
            .collect()
    }
}
