use actix_easy_multipart::MultipartForm;
use actix_web::{
    delete, get,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    post, web, HttpResponse,
};
use domain_report::{command::SaveAttachmentCommand, exception::ReportException};
use tokio::io::AsyncReadExt;

use super::{created, dtos::AttachmentUploadForm, ok, ApiError, ApiResult, Requester};
use crate::infrastructure::ServiceProvider;

const DOWNLOAD_CHUNK_SIZE: usize = 64 * 1024;
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[post("/teknisi/reports/{id}/attachments")]
pub async fn upload(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    id: web::Path<i64>,
    data: MultipartForm<AttachmentUploadForm>,
) -> ApiResult {
    let upload = data.0.file;
    // A second handle, the temp file itself lives until the request ends.
    let content = upload
        .file
        .reopen()
        .map_err(|e| ApiError::bad_request(format!("Uploaded file can't be read: {e}")))?;
    let command = SaveAttachmentCommand {
        report_id: id.into_inner(),
        teknisi_id: actor.id,
        original_name: upload.file_name.clone().unwrap_or_default(),
        content_type: upload
            .content_type
            .as_ref()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string()),
        size: upload.size as i64,
        content: Box::new(tokio::fs::File::from_std(content)),
    };
    let attachment = sp.scoped().attachment_service.save(command).await?;
    Ok(created(attachment))
}

#[get("/teknisi/reports/{id}/attachments/{attachment_id}/download")]
pub async fn download(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    path: web::Path<(i64, i64)>,
) -> ApiResult {
    let (report_id, attachment_id) = path.into_inner();
    let opened = sp.scoped().attachment_service.open(report_id, actor, attachment_id).await?;
    let file = match tokio::fs::File::open(&opened.path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                "Attachment {attachment_id} of report {report_id} has no file at {}",
                opened.path.display()
            );
            return Err(ReportException::AttachmentNotFound {
                report_id,
                attachment_id,
            }
            .into());
        }
        Err(e) => return Err(ReportException::from(e).into()),
    };
    let length = file.metadata().await.map_err(ReportException::from)?.len();

    let chunks = futures::stream::try_unfold(file, |mut file| async move {
        let mut buf = vec![0; DOWNLOAD_CHUNK_SIZE];
        let n = file.read(&mut buf).await?;
        if n == 0 {
            return Ok::<_, std::io::Error>(None);
        }
        buf.truncate(n);
        Ok(Some((web::Bytes::from(buf), file)))
    });

    let content_type = match opened.attachment.content_type.as_str() {
        "" => FALLBACK_CONTENT_TYPE.to_string(),
        content_type => content_type.to_string(),
    };
    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(opened.attachment.file_name)],
        })
        .no_chunking(length)
        .streaming(chunks))
}

#[delete("/teknisi/reports/{id}/attachments/{attachment_id}")]
pub async fn remove(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    path: web::Path<(i64, i64)>,
) -> ApiResult {
    let (report_id, attachment_id) = path.into_inner();
    sp.scoped()
        .attachment_service
        .delete(report_id, actor.id, attachment_id)
        .await?;
    Ok(ok(()))
}
