use actix_easy_multipart::{tempfile::Tempfile, MultipartForm};
use domain_report::{
    command::{CreateReportCommand, CustomerInfo, DeviceInfo, UpdateProgressCommand},
    model::vo::{ListFilter, ProgressStatus, ReportStatus},
};
use serde::Deserialize;
use serde_json::Value;

use super::ApiError;

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{field} is required.")));
    }
    Ok(())
}

#[derive(Deserialize)]
pub struct CreateReportRequest {
    pub customer: CustomerInfo,
    pub device: DeviceInfo,
    pub complaint: String,
    pub form_payload: Value,
}

impl CreateReportRequest {
    pub fn into_command(self, admin_id: i64) -> Result<CreateReportCommand, ApiError> {
        require("customer.name", &self.customer.name)?;
        require("customer.address", &self.customer.address)?;
        require("customer.contact", &self.customer.contact)?;
        require("device.name", &self.device.name)?;
        require("device.serial", &self.device.serial)?;
        require("device.location", &self.device.location)?;
        require("complaint", &self.complaint)?;
        if self.form_payload.is_null() {
            return Err(ApiError::bad_request("form_payload is required."));
        }
        Ok(CreateReportCommand {
            admin_id,
            customer: self.customer,
            device: self.device,
            complaint: self.complaint,
            form_payload: self.form_payload,
        })
    }
}

#[derive(Deserialize)]
pub struct AssignRequest {
    pub teknisi_id: i64,
}

#[derive(Deserialize)]
pub struct UpdateProgressRequest {
    pub status: ProgressStatus,
    pub job_summary: String,
    pub action_taken: String,
}

impl UpdateProgressRequest {
    pub fn into_command(
        self,
        report_id: i64,
        teknisi_id: i64,
    ) -> Result<UpdateProgressCommand, ApiError> {
        require("job_summary", &self.job_summary)?;
        require("action_taken", &self.action_taken)?;
        Ok(UpdateProgressCommand {
            report_id,
            teknisi_id,
            status: self.status,
            job_summary: self.job_summary,
            action_taken: self.action_taken,
        })
    }
}

#[derive(Deserialize)]
pub struct SaveFormRequest {
    pub payload: Value,
}

/// `?status=` of the administrative listing, an empty value means every status.
#[derive(Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub status: String,
    pub admin_id: Option<i64>,
}

impl TryFrom<ListQuery> for ListFilter {
    type Error = ApiError;

    fn try_from(query: ListQuery) -> Result<Self, Self::Error> {
        let status = match query.status.trim() {
            "" => None,
            status => Some(
                status
                    .parse::<ReportStatus>()
                    .map_err(|e| ApiError::bad_request(e.to_string()))?,
            ),
        };
        Ok(ListFilter {
            status,
            admin_id: query.admin_id,
        })
    }
}

#[derive(MultipartForm)]
pub struct AttachmentUploadForm {
    pub file: Tempfile,
}
