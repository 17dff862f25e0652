use actix_files::Files;
use domain_report::model::vo::{UploadRoot, PUBLIC_PREFIX};

/// Read-only `/uploads/...` view of the upload root, the paths written into payloads and
/// attachment rows resolve here. Directories aren't listed.
pub fn uploads_service(upload_root: &UploadRoot) -> Files {
    Files::new(PUBLIC_PREFIX, upload_root.base())
}
