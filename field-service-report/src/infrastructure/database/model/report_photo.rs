use std::str::FromStr;

use domain_report::model::entity::{PhotoType, ReportPhoto};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "report_photos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub report_id: i64,
    #[sea_orm(column_name = "type")]
    pub photo_type: String,
    pub file_path: String,
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

impl TryFrom<Model> for ReportPhoto {
    type Error = anyhow::Error;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            report_id: model.report_id,
            r#type: PhotoType::from_str(&model.photo_type)?,
            file_path: model.file_path,
            created_at: model.created_at,
        })
    }
}
