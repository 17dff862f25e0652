//! Who may see and touch which report.

use domain_report::{
    exception::{ReportException, ReportResult},
    model::{entity::ServiceReport, vo::Actor},
    repository::ReportRepo,
};

pub fn ensure_admin(actor: &Actor) -> ReportResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ReportException::forbidden(format!(
            "user {} with role {} is not an administrator",
            actor.id, actor.role
        )))
    }
}

/// Administrators reach every report, technicians only the ones assigned to them.
pub fn ensure_can_access(actor: &Actor, report: &ServiceReport) -> ReportResult<()> {
    if actor.is_admin() {
        return Ok(());
    }
    ensure_assigned(report, actor.id)
}

pub fn ensure_assigned(report: &ServiceReport, teknisi_id: i64) -> ReportResult<()> {
    if report.is_assigned_to(teknisi_id) {
        Ok(())
    } else {
        Err(ReportException::forbidden(format!(
            "report {} is not assigned to technician {teknisi_id}",
            report.id
        )))
    }
}

/// Load a report with its media, `NotFound` before `Forbidden`.
pub async fn load_for_technician(
    repo: &dyn ReportRepo,
    report_id: i64,
    teknisi_id: i64,
) -> ReportResult<ServiceReport> {
    let report = load(repo, report_id).await?;
    ensure_assigned(&report, teknisi_id)?;
    Ok(report)
}

pub async fn load_for_actor(
    repo: &dyn ReportRepo,
    report_id: i64,
    actor: &Actor,
) -> ReportResult<ServiceReport> {
    let report = load(repo, report_id).await?;
    ensure_can_access(actor, &report)?;
    Ok(report)
}

pub async fn load(repo: &dyn ReportRepo, report_id: i64) -> ReportResult<ServiceReport> {
    repo.get_with_media(report_id)
        .await?
        .ok_or(ReportException::NotFound { report_id })
}
