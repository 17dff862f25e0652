//! Relational model of reports.
mod report_attachment;
mod report_photo;
mod service_report;
mod status_log;

use architecture::repository::DbField;
use sea_orm::ActiveValue;

pub mod prelude {
    pub use super::{
        report_attachment::{
            ActiveModel as ReportAttachmentActiveModel, Column as ReportAttachmentColumn,
            Entity as ReportAttachmentEntity,
        },
        report_photo::{Column as ReportPhotoColumn, Entity as ReportPhotoEntity},
        service_report::{
            ActiveModel as ServiceReportActiveModel, Column as ServiceReportColumn,
            Entity as ServiceReportEntity, Model as ServiceReportModel,
        },
        status_log::{
            ActiveModel as StatusLogActiveModel, Column as StatusLogColumn,
            Entity as StatusLogEntity,
        },
    };
}

fn active_value<T>(field: DbField<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match field {
        DbField::Set(v) => ActiveValue::Set(v),
        DbField::Unchanged(v) => ActiveValue::Unchanged(v),
        DbField::NotSet => ActiveValue::NotSet,
    }
}
