use std::{path::Path, sync::Arc};

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use domain_report::{
    command::SaveAttachmentCommand,
    exception::{ReportException, ReportResult},
    model::{
        entity::ReportAttachment,
        vo::{Actor, UploadRoot},
    },
    repository::{ReportAttachmentRepo, ReportRepo},
    service::{AttachmentFile, AttachmentService},
};
use tokio::io::{AsyncRead, AsyncWriteExt};
use typed_builder::TypedBuilder;

use crate::{access, naming};

#[derive(TypedBuilder)]
pub struct AttachmentServiceImpl {
    report_repo: Arc<dyn ReportRepo>,
    attachment_repo: Arc<dyn ReportAttachmentRepo>,
    #[builder(default)]
    upload_root: UploadRoot,
}

async fn create_parent_and_copy(
    path: &Path,
    content: &mut (dyn AsyncRead + Send + Unpin),
) -> anyhow::Result<u64> {
    tokio::fs::create_dir_all(path.parent().ok_or(anyhow!("path: {path:?} doesn't has parent."))?)
        .await?;
    let mut file = tokio::fs::File::create(path).await?;
    let written = tokio::io::copy(content, &mut file).await?;
    file.flush().await?;
    Ok(written)
}

/// Remove a file, a missing one counts as removed.
async fn remove_if_exists(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

#[async_trait]
impl AttachmentService for AttachmentServiceImpl {
    async fn save(&self, mut command: SaveAttachmentCommand) -> ReportResult<ReportAttachment> {
        let report_id = command.report_id;
        access::load_for_technician(self.report_repo.as_ref(), report_id, command.teknisi_id)
            .await?;

        let file_name = naming::sanitize_file_name(&command.original_name);
        let relative = format!(
            "{}/{}",
            UploadRoot::attachments_dir(report_id),
            naming::stored_file_name(&file_name)
        );
        let path = self.upload_root.resolve(&relative);

        if let Err(e) = create_parent_and_copy(&path, command.content.as_mut()).await {
            if let Err(cleanup) = remove_if_exists(&path).await {
                tracing::warn!("Failed to remove partial upload {path:?}: {cleanup}");
            }
            return Err(e.into());
        }

        let mut attachment = ReportAttachment {
            id: 0,
            report_id,
            file_path: relative,
            file_name,
            content_type: command.content_type,
            size: command.size,
            created_at: Utc::now(),
        };
        match self.attachment_repo.insert_immediately(&attachment).await {
            Ok(id) => attachment.id = id,
            Err(e) => {
                // The row is gone, so is the file.
                if let Err(cleanup) = remove_if_exists(&path).await {
                    tracing::warn!("Failed to remove orphaned upload {path:?}: {cleanup}");
                }
                return Err(e.into());
            }
        }
        tracing::info!(
            "Stored attachment {} of report {report_id} at {path:?}",
            attachment.id
        );
        Ok(attachment)
    }

    async fn get(&self, report_id: i64, attachment_id: i64) -> ReportResult<ReportAttachment> {
        self.attachment_repo
            .get_by_report_and_id(report_id, attachment_id)
            .await?
            .ok_or(ReportException::AttachmentNotFound {
                report_id,
                attachment_id,
            })
    }

    async fn open(
        &self,
        report_id: i64,
        actor: Actor,
        attachment_id: i64,
    ) -> ReportResult<AttachmentFile> {
        access::load_for_actor(self.report_repo.as_ref(), report_id, &actor).await?;
        let attachment = self.get(report_id, attachment_id).await?;
        let path = self.upload_root.resolve(&attachment.file_path);
        Ok(AttachmentFile { attachment, path })
    }

    async fn delete(
        &self,
        report_id: i64,
        teknisi_id: i64,
        attachment_id: i64,
    ) -> ReportResult<()> {
        let report =
            access::load_for_technician(self.report_repo.as_ref(), report_id, teknisi_id).await?;
        if report.status.is_done() {
            return Err(ReportException::forbidden(format!(
                "report {report_id} is done, its attachments can't be deleted"
            )));
        }
        let attachment = self.get(report_id, attachment_id).await?;

        self.attachment_repo.delete_by_id(attachment.id).await?;
        self.attachment_repo.save_changed().await?;

        let path = self.upload_root.resolve(&attachment.file_path);
        if let Err(e) = remove_if_exists(&path).await {
            tracing::warn!("Attachment {attachment_id} deleted but {path:?} stays: {e}");
        }
        Ok(())
    }
}
