use domain_report::model::entity::ReportAttachment;
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "report_attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub report_id: i64,
    /// Relative to the upload root.
    pub file_path: String,
    pub file_name: String,
    pub content_type: String,
    pub size: i64,
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

impl From<Model> for ReportAttachment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            report_id: model.report_id,
            file_path: model.file_path,
            file_name: model.file_name,
            content_type: model.content_type,
            size: model.size,
            created_at: model.created_at,
        }
    }
}

impl From<&ReportAttachment> for ActiveModel {
    fn from(attachment: &ReportAttachment) -> Self {
        Self {
            id: NotSet,
            report_id: Set(attachment.report_id),
            file_path: Set(attachment.file_path.to_owned()),
            file_name: Set(attachment.file_name.to_owned()),
            content_type: Set(attachment.content_type.to_owned()),
            size: Set(attachment.size),
            created_at: Set(attachment.created_at),
        }
    }
}
