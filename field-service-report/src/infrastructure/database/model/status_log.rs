use std::str::FromStr;

use domain_report::model::{entity::StatusLog, vo::ReportStatus};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "status_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub report_id: i64,
    pub changed_by: i64,
    pub from_status: String,
    pub to_status: String,
    #[sea_orm(column_type = "Text")]
    pub note: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service_report::Entity",
        from = "Column::ReportId",
        to = "super::service_report::Column::Id",
        on_delete = "Cascade"
    )]
    ServiceReport,
}

impl Related<super::service_report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceReport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for StatusLog {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            report_id: model.report_id,
            changed_by: model.changed_by,
            from: ReportStatus::from_str(&model.from_status)?,
            to: ReportStatus::from_str(&model.to_status)?,
            note: model.note,
            created_at: model.created_at,
        })
    }
}

impl From<&StatusLog> for ActiveModel {
    fn from(log: &StatusLog) -> Self {
        Self {
            id: NotSet,
            report_id: Set(log.report_id),
            changed_by: Set(log.changed_by),
            from_status: Set(log.from.to_string()),
            to_status: Set(log.to.to_string()),
            note: Set(log.note.to_owned()),
            created_at: Set(log.created_at),
        }
    }
}
