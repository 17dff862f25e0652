use sea_orm::{
    sea_query::{Index, IndexCreateStatement},
    ConnectionTrait, EntityTrait, Schema,
};

use super::{model::prelude::*, Database};

async fn create_table<E>(db: &Database, schema: &Schema, entity: E) -> anyhow::Result<()>
where
    E: EntityTrait,
{
    let conn = db.get_connection();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();
    conn.execute(conn.get_database_backend().build(&stmt)).await?;
    tracing::debug!("Ensured table {}", entity.table_name());
    Ok(())
}

/// Indexes backing the report listings: per technician, per status and per creator, the first
/// two ordered by `opened_at`.
fn report_indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name("idx_service_reports_teknisi_opened")
            .table(ServiceReportEntity)
            .col(ServiceReportColumn::TeknisiId)
            .col(ServiceReportColumn::OpenedAt)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_service_reports_status_opened")
            .table(ServiceReportEntity)
            .col(ServiceReportColumn::Status)
            .col(ServiceReportColumn::OpenedAt)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_service_reports_admin")
            .table(ServiceReportEntity)
            .col(ServiceReportColumn::AdminId)
            .to_owned(),
    ]
}

/// Create the report tables and indexes that don't exist yet, parents first.
pub async fn create_tables(db: &Database) -> anyhow::Result<()> {
    let conn = db.get_connection();
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    create_table(db, &schema, ServiceReportEntity).await?;
    create_table(db, &schema, ReportPhotoEntity).await?;
    create_table(db, &schema, ReportAttachmentEntity).await?;
    create_table(db, &schema, StatusLogEntity).await?;
    for index in report_indexes() {
        conn.execute(backend.build(&index)).await?;
    }
    Ok(())
}
