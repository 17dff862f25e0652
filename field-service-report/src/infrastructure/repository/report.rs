use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use domain_report::{
    model::{
        entity::{DbServiceReport, ReportAttachment, ReportPhoto, ServiceReport},
        vo::ListFilter,
    },
    repository::ReportRepo,
};
use sea_orm::{prelude::*, QueryFilter, QueryOrder, QuerySelect, QueryTrait};

use crate::infrastructure::database::{model::prelude::*, OrmRepo};

fn into_reports(models: Vec<ServiceReportModel>) -> anyhow::Result<Vec<ServiceReport>> {
    models.into_iter().map(ServiceReport::try_from).collect()
}

#[async_trait]
impl ReadOnlyRepository<ServiceReport> for OrmRepo {
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ServiceReport>> {
        ServiceReportEntity::find_by_id(id)
            .one(self.db.get_connection())
            .await?
            .map(ServiceReport::try_from)
            .transpose()
    }
}

#[async_trait]
impl MutableRepository<ServiceReport> for OrmRepo {
    async fn insert(&self, entity: &ServiceReport) -> anyhow::Result<()> {
        let stmt = ServiceReportEntity::insert(ServiceReportActiveModel::from(entity))
            .build(self.backend());
        self.push(stmt).await;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<()> {
        let stmt = ServiceReportEntity::delete_by_id(id).build(self.backend());
        self.push(stmt).await;
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        self.save_changed().await
    }
}

impl DBRepository<ServiceReport> for OrmRepo {}

#[async_trait]
impl ReportRepo for OrmRepo {
    async fn insert_immediately(&self, entity: &ServiceReport) -> anyhow::Result<i64> {
        let result = ServiceReportEntity::insert(ServiceReportActiveModel::from(entity))
            .exec(self.db.get_connection())
            .await?;
        Ok(result.last_insert_id)
    }

    async fn update(&self, entity: DbServiceReport) -> anyhow::Result<()> {
        if entity.id.value().is_none() {
            anyhow::bail!("Report update without id: {entity:?}");
        }
        let stmt = ServiceReportEntity::update(ServiceReportActiveModel::from(entity))
            .build(self.backend());
        self.push(stmt).await;
        Ok(())
    }

    async fn get_with_media(&self, id: i64) -> anyhow::Result<Option<ServiceReport>> {
        let conn = self.db.get_connection();
        let Some(model) = ServiceReportEntity::find_by_id(id).one(conn).await? else {
            return Ok(None);
        };
        let mut report = ServiceReport::try_from(model)?;
        report.photos = ReportPhotoEntity::find()
            .filter(ReportPhotoColumn::ReportId.eq(id))
            .order_by_asc(ReportPhotoColumn::Id)
            .all(conn)
            .await?
            .into_iter()
            .map(ReportPhoto::try_from)
            .collect::<anyhow::Result<_>>()?;
        report.attachments = ReportAttachmentEntity::find()
            .filter(ReportAttachmentColumn::ReportId.eq(id))
            .order_by_asc(ReportAttachmentColumn::Id)
            .all(conn)
            .await?
            .into_iter()
            .map(ReportAttachment::from)
            .collect();
        Ok(Some(report))
    }

    async fn get_all_by_filter(
        &self,
        filter: &ListFilter,
        limit: u64,
    ) -> anyhow::Result<Vec<ServiceReport>> {
        let mut query = ServiceReportEntity::find();
        if let Some(status) = filter.status {
            query = query.filter(ServiceReportColumn::Status.eq(status.as_str()));
        }
        if let Some(admin_id) = filter.admin_id {
            query = query.filter(ServiceReportColumn::AdminId.eq(admin_id));
        }
        let models = query
            .order_by_desc(ServiceReportColumn::OpenedAt)
            .limit(limit)
            .all(self.db.get_connection())
            .await?;
        into_reports(models)
    }

    async fn get_all_by_teknisi(&self, teknisi_id: i64) -> anyhow::Result<Vec<ServiceReport>> {
        let models = ServiceReportEntity::find()
            .filter(ServiceReportColumn::TeknisiId.eq(teknisi_id))
            .order_by_desc(ServiceReportColumn::OpenedAt)
            .all(self.db.get_connection())
            .await?;
        into_reports(models)
    }
}
