use crate::{
    model::{
        entity::{DbServiceReport, ReportAttachment, ServiceReport, StatusLog},
        vo::{Extraction, ListFilter, ReportStatus},
    },
    repository::{ReportAttachmentRepo, ReportRepo, StatusLogRepo},
    service::MediaExtractorService,
};
use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

mock! {
    pub ReportRepo {}
    #[async_trait]
    impl ReportRepo for ReportRepo {
        async fn insert_immediately(&self, entity: &ServiceReport) -> anyhow::Result<i64>;
        async fn update(&self, entity: DbServiceReport) -> anyhow::Result<()>;
        async fn get_with_media(&self, id: i64) -> anyhow::Result<Option<ServiceReport>>;
        async fn get_all_by_filter(
            &self,
            filter: &ListFilter,
            limit: u64,
        ) -> anyhow::Result<Vec<ServiceReport>>;
        async fn get_all_by_teknisi(&self, teknisi_id: i64) -> anyhow::Result<Vec<ServiceReport>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<ServiceReport> for ReportRepo {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ServiceReport>>;
    }
    #[async_trait]
    impl MutableRepository<ServiceReport> for ReportRepo {
        async fn insert(&self, entity: &ServiceReport) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<ServiceReport> for ReportRepo {}
}

mock! {
    pub ReportAttachmentRepo {}
    #[async_trait]
    impl ReportAttachmentRepo for ReportAttachmentRepo {
        async fn insert_immediately(&self, entity: &ReportAttachment) -> anyhow::Result<i64>;
        async fn get_by_report_and_id(
            &self,
            report_id: i64,
            id: i64,
        ) -> anyhow::Result<Option<ReportAttachment>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<ReportAttachment> for ReportAttachmentRepo {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ReportAttachment>>;
    }
    #[async_trait]
    impl MutableRepository<ReportAttachment> for ReportAttachmentRepo {
        async fn insert(&self, entity: &ReportAttachment) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<ReportAttachment> for ReportAttachmentRepo {}
}

mock! {
    pub StatusLogRepo {}
    #[async_trait]
    impl StatusLogRepo for StatusLogRepo {
        async fn get_all_by_report(&self, report_id: i64) -> anyhow::Result<Vec<StatusLog>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<StatusLog> for StatusLogRepo {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<StatusLog>>;
    }
    #[async_trait]
    impl MutableRepository<StatusLog> for StatusLogRepo {
        async fn insert(&self, entity: &StatusLog) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i64) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<StatusLog> for StatusLogRepo {}
}

mock! {
    pub MediaExtractorService {}
    #[async_trait]
    impl MediaExtractorService for MediaExtractorService {
        async fn extract(&self, report_id: i64, status: ReportStatus, payload: Value) -> Extraction;
    }
}
