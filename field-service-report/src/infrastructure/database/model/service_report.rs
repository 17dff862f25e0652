use std::str::FromStr;

use domain_report::model::{
    entity::{DbServiceReport, ServiceReport},
    vo::ReportStatus,
};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

use super::active_value;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub dispatch_no: String,
    pub admin_id: i64,
    pub teknisi_id: Option<i64>,
    pub customer_name: String,
    pub customer_address: String,
    pub customer_contact: String,
    pub device_name: String,
    pub serial_number: String,
    pub device_location: String,
    #[sea_orm(column_type = "Text")]
    pub complaint: String,
    #[sea_orm(column_type = "Text")]
    pub action_taken: String,
    /// `open`, `progress` or `done`.
    pub status: String,
    pub opened_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "JsonBinary")]
    pub form_payload: Json,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub teknisi_payload: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::report_photo::Entity")]
    ReportPhoto,
    #[sea_orm(has_many = "super::report_attachment::Entity")]
    ReportAttachment,
    #[sea_orm(has_many = "super::status_log::Entity")]
    StatusLog,
}

impl Related<super::report_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportPhoto.def()
    }
}

impl Related<super::report_attachment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportAttachment.def()
    }
}

impl Related<super::status_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ServiceReport {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            dispatch_no: model.dispatch_no,
            admin_id: model.admin_id,
            teknisi_id: model.teknisi_id,
            customer_name: model.customer_name,
            customer_address: model.customer_address,
            customer_contact: model.customer_contact,
            device_name: model.device_name,
            serial_number: model.serial_number,
            device_location: model.device_location,
            complaint: model.complaint,
            action_taken: model.action_taken,
            status: ReportStatus::from_str(&model.status)?,
            opened_at: model.opened_at,
            updated_at: model.updated_at,
            completed_at: model.completed_at,
            form_payload: model.form_payload,
            teknisi_payload: model.teknisi_payload,
            photos: vec![],
            attachments: vec![],
        })
    }
}

impl From<&ServiceReport> for ActiveModel {
    /// A new row, the id is generated by the database.
    fn from(report: &ServiceReport) -> Self {
        Self {
            id: NotSet,
            dispatch_no: Set(report.dispatch_no.to_owned()),
            admin_id: Set(report.admin_id),
            teknisi_id: Set(report.teknisi_id),
            customer_name: Set(report.customer_name.to_owned()),
            customer_address: Set(report.customer_address.to_owned()),
            customer_contact: Set(report.customer_contact.to_owned()),
            device_name: Set(report.device_name.to_owned()),
            serial_number: Set(report.serial_number.to_owned()),
            device_location: Set(report.device_location.to_owned()),
            complaint: Set(report.complaint.to_owned()),
            action_taken: Set(report.action_taken.to_owned()),
            status: Set(report.status.to_string()),
            opened_at: Set(report.opened_at),
            updated_at: Set(report.updated_at),
            completed_at: Set(report.completed_at),
            form_payload: Set(report.form_payload.to_owned()),
            teknisi_payload: Set(report.teknisi_payload.to_owned()),
        }
    }
}

impl From<DbServiceReport> for ActiveModel {
    fn from(update: DbServiceReport) -> Self {
        Self {
            id: active_value(update.id),
            teknisi_id: active_value(update.teknisi_id),
            action_taken: active_value(update.action_taken),
            status: active_value(update.status.map(|s| s.to_string())),
            updated_at: active_value(update.updated_at),
            completed_at: active_value(update.completed_at),
            form_payload: active_value(update.form_payload),
            teknisi_payload: active_value(update.teknisi_payload),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use architecture::repository::DbField;
    use sea_orm::ActiveValue;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_partial_update_only_sets_given_fields() {
        let active: ActiveModel = DbServiceReport {
            id: DbField::Unchanged(4),
            status: DbField::Set(ReportStatus::Done),
            form_payload: DbField::Set(json!({ "a": 1 })),
            ..Default::default()
        }
        .into();

        assert_eq!(active.id, ActiveValue::Unchanged(4));
        assert_eq!(active.status, ActiveValue::Set("done".to_string()));
        assert_eq!(active.form_payload, ActiveValue::Set(json!({ "a": 1 })));
        assert_eq!(active.teknisi_id, ActiveValue::NotSet);
        assert_eq!(active.dispatch_no, ActiveValue::NotSet);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let model = Model {
            id: 1,
            dispatch_no: "20240301-101010-123".to_string(),
            admin_id: 1,
            teknisi_id: None,
            customer_name: String::new(),
            customer_address: String::new(),
            customer_contact: String::new(),
            device_name: String::new(),
            serial_number: String::new(),
            device_location: String::new(),
            complaint: String::new(),
            action_taken: String::new(),
            status: "archived".to_string(),
            opened_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            completed_at: None,
            form_payload: json!({}),
            teknisi_payload: None,
        };
        assert!(ServiceReport::try_from(model.clone()).is_err());
        let model = Model {
            status: "progress".to_string(),
            ..model
        };
        assert_eq!(ServiceReport::try_from(model).unwrap().status, ReportStatus::Progress);
    }
}
