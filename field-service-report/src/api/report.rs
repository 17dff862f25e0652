use actix_web::{get, patch, post, web, HttpResponse};
use domain_report::model::vo::ListFilter;
use service_report::access::ensure_admin;

use super::{
    created,
    dtos::{AssignRequest, CreateReportRequest, ListQuery, SaveFormRequest, UpdateProgressRequest},
    ok, ApiResult, Requester,
};
use crate::infrastructure::ServiceProvider;

#[post("/reports")]
pub async fn create(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    data: web::Json<CreateReportRequest>,
) -> ApiResult {
    ensure_admin(&actor)?;
    let command = data.into_inner().into_command(actor.id)?;
    let report = sp.scoped().report_service.create(command).await?;
    Ok(created(report))
}

#[get("/reports")]
pub async fn list(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    query: web::Query<ListQuery>,
) -> ApiResult {
    ensure_admin(&actor)?;
    let filter = ListFilter::try_from(query.into_inner())?;
    let reports = sp.scoped().report_service.list(filter).await?;
    Ok(ok(reports))
}

#[patch("/reports/{id}/assign")]
pub async fn assign(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    id: web::Path<i64>,
    data: web::Json<AssignRequest>,
) -> ApiResult {
    ensure_admin(&actor)?;
    let report = sp
        .scoped()
        .report_service
        .assign(id.into_inner(), data.teknisi_id, actor.id)
        .await?;
    Ok(ok(report))
}

#[get("/teknisi/reports")]
pub async fn list_assigned(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
) -> ApiResult {
    let reports = sp.scoped().report_service.list_assigned(actor.id).await?;
    Ok(ok(reports))
}

#[get("/teknisi/reports/{id}")]
pub async fn detail(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    id: web::Path<i64>,
) -> ApiResult {
    let report = sp.scoped().report_service.get_for_actor(id.into_inner(), actor).await?;
    Ok(ok(report))
}

#[get("/teknisi/reports/{id}/status-logs")]
pub async fn status_logs(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    id: web::Path<i64>,
) -> ApiResult {
    let logs = sp.scoped().report_service.status_history(id.into_inner(), actor).await?;
    Ok(ok(logs))
}

#[patch("/teknisi/reports/{id}/form")]
pub async fn save_form(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    id: web::Path<i64>,
    data: web::Json<SaveFormRequest>,
) -> ApiResult {
    let report = sp
        .scoped()
        .report_service
        .save_technician_payload(id.into_inner(), actor.id, data.into_inner().payload)
        .await?;
    Ok(ok(report))
}

#[patch("/teknisi/reports/{id}/progress")]
pub async fn update_progress(
    sp: web::Data<ServiceProvider>,
    Requester(actor): Requester,
    id: web::Path<i64>,
    data: web::Json<UpdateProgressRequest>,
) -> ApiResult {
    let command = data.into_inner().into_command(id.into_inner(), actor.id)?;
    let report = sp.scoped().report_service.update_progress(command).await?;
    Ok(ok(report))
}

#[get("/healthz")]
pub async fn healthz() -> HttpResponse {
    ok("ok")
}
