use std::sync::Arc;

use domain_report::{
    model::vo::UploadRoot,
    service::{AttachmentService, MediaExtractorService, ReportService},
};
use service_report::{AttachmentServiceImpl, MediaExtractorServiceImpl, ReportServiceImpl};

use super::{
    config::ReportConfig,
    database::{create_tables, Database, OrmRepo},
};

/// Process wide dependencies, built once at startup.
pub struct ServiceProvider {
    config: ReportConfig,
    database: Arc<Database>,
    upload_root: UploadRoot,
    media_extractor: Arc<dyn MediaExtractorService>,
}

impl ServiceProvider {
    pub async fn build(config: ReportConfig) -> anyhow::Result<Self> {
        let database = Arc::new(Database::new(&config.db.url).await?);
        if config.db.auto_migrate {
            create_tables(&database).await?;
        }
        let upload_root = UploadRoot::new(&config.upload.root);
        tokio::fs::create_dir_all(upload_root.base()).await?;
        let media_extractor = Arc::new(
            MediaExtractorServiceImpl::builder().upload_root(upload_root.clone()).build(),
        );
        Ok(Self {
            config,
            database,
            upload_root,
            media_extractor,
        })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn upload_root(&self) -> &UploadRoot {
        &self.upload_root
    }

    /// Dependencies of one request, sharing a single unit of work.
    pub fn scoped(&self) -> ServiceProviderScoped {
        let repo = Arc::new(OrmRepo::builder().db(self.database.clone()).build());
        ServiceProviderScoped {
            report_service: Arc::new(
                ReportServiceImpl::builder()
                    .report_repo(repo.clone())
                    .status_log_repo(repo.clone())
                    .media_extractor(self.media_extractor.clone())
                    .build(),
            ),
            attachment_service: Arc::new(
                AttachmentServiceImpl::builder()
                    .report_repo(repo.clone())
                    .attachment_repo(repo)
                    .upload_root(self.upload_root.clone())
                    .build(),
            ),
        }
    }
}

pub struct ServiceProviderScoped {
    pub report_service: Arc<dyn ReportService>,
    pub attachment_service: Arc<dyn AttachmentService>,
}
