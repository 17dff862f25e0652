use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_report::{model::entity::ReportAttachment, repository::ReportAttachmentRepo};
use sea_orm::{prelude::*, QueryFilter, QueryTrait};

use crate::infrastructure::database::{model::prelude::*, OrmRepo};

#[async_trait]
impl ReadOnlyRepository<ReportAttachment> for OrmRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ReportAttachment>> {
        Ok(ReportAttachmentEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(ReportAttachment::from))
    }
}

#[async_trait]
impl MutableRepository<ReportAttachment> for OrmRepo {
    async fn insert(&self, entity: &ReportAttachment) -> anyhow::Result<()> {
        let stmt = ReportAttachmentEntity::insert(ReportAttachmentActiveModel::from(entity))
            .build(self.backend());
        self.push(stmt).await;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        let stmt = ReportAttachmentEntity::delete_by_id(id).build(self.backend());
        self.push(stmt).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<ReportAttachment> for OrmRepo {}

#[async_trait]
impl ReportAttachmentRepo for OrmRepo {
    async fn insert_immediately(&self, entity: &ReportAttachment) -> anyhow::Result<i64> {
        let result = ReportAttachmentEntity::insert(ReportAttachmentActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn get_by_report_and_id(
        &self,
        report_id: i64,
        id: i64,
    ) -> anyhow::Result<Option<ReportAttachment>> {
        Ok(ReportAttachmentEntity::find_by_id(id)
            .filter(ReportAttachmentColumn::ReportId.eq(report_id))
            .one(self.db.get_connection())
            .await?
            .map(ReportAttachment::from))
    }
}
