use std::sync::Arc;

use architecture::repository::DbField;
use async_trait::async_trait;
use chrono::Utc;
use domain_report::{
    command::{CreateReportCommand, UpdateProgressCommand},
    exception::{ReportException, ReportResult},
    model::{
        entity::{DbServiceReport, ServiceReport, StatusLog},
        vo::{Actor, ListFilter, ReportStatus, MAX_LIST_SIZE},
    },
    repository::{ReportRepo, StatusLogRepo},
    service::{MediaExtractorService, ReportService},
};
use serde_json::Value;
use typed_builder::TypedBuilder;

use crate::{access, naming};

pub const ASSIGN_NOTE: &str = "Assigned technician";

/// Report lifecycle on top of the repositories.
///
/// `report_repo` and `status_log_repo` are expected to share one unit of work, so a report
/// change and its status log are committed by the same `save_changed`.
#[derive(TypedBuilder)]
pub struct ReportServiceImpl {
    report_repo: Arc<dyn ReportRepo>,
    status_log_repo: Arc<dyn StatusLogRepo>,
    media_extractor: Arc<dyn MediaExtractorService>,
    #[builder(default = MAX_LIST_SIZE)]
    list_limit: u64,
}

fn progress_note(job_summary: &str) -> String {
    format!("Summary: {job_summary}")
}

impl ReportServiceImpl {
    /// Rewrite inline images of a freshly created report. Errors are only logged.
    async fn extract_form_payload(&self, report: &mut ServiceReport) {
        let extraction = self
            .media_extractor
            .extract(report.id, report.status, report.form_payload.clone())
            .await;
        if extraction.payload == report.form_payload {
            return;
        }
        let now = Utc::now();
        let persisted = async {
            self.report_repo
                .update(DbServiceReport {
                    id: DbField::Unchanged(report.id),
                    form_payload: DbField::Set(extraction.payload.clone()),
                    updated_at: DbField::Set(now),
                    ..Default::default()
                })
                .await?;
            self.report_repo.save_changed().await
        }
        .await;
        match persisted {
            Ok(_) => {
                report.form_payload = extraction.payload;
                report.updated_at = now;
            }
            Err(e) => tracing::warn!(
                "Report {} created but its form payload keeps inline images: {e}",
                report.id
            ),
        }
    }

    async fn find(&self, report_id: i64) -> ReportResult<ServiceReport> {
        self.report_repo
            .find_by_id(report_id)
            .await?
            .ok_or(ReportException::NotFound { report_id })
    }
}

#[async_trait]
impl ReportService for ReportServiceImpl {
    async fn create(&self, command: CreateReportCommand) -> ReportResult<ServiceReport> {
        let now = Utc::now();
        let mut report = ServiceReport {
            id: 0,
            dispatch_no: naming::dispatch_no(now),
            admin_id: command.admin_id,
            teknisi_id: None,
            customer_name: command.customer.name,
            customer_address: command.customer.address,
            customer_contact: command.customer.contact,
            device_name: command.device.name,
            serial_number: command.device.serial,
            device_location: command.device.location,
            complaint: command.complaint,
            action_taken: String::new(),
            status: ReportStatus::Open,
            opened_at: now,
            updated_at: now,
            completed_at: None,
            form_payload: command.form_payload,
            teknisi_payload: None,
            photos: vec![],
            attachments: vec![],
        };
        report.id = self.report_repo.insert_immediately(&report).await?;
        tracing::info!(
            "Report {} ({}) created by admin {}",
            report.id,
            report.dispatch_no,
            report.admin_id
        );
        self.extract_form_payload(&mut report).await;
        Ok(report)
    }

    async fn list(&self, filter: ListFilter) -> ReportResult<Vec<ServiceReport>> {
        Ok(self.report_repo.get_all_by_filter(&filter, self.list_limit).await?)
    }

    async fn list_assigned(&self, teknisi_id: i64) -> ReportResult<Vec<ServiceReport>> {
        Ok(self.report_repo.get_all_by_teknisi(teknisi_id).await?)
    }

    async fn get_by_id(&self, id: i64) -> ReportResult<ServiceReport> {
        access::load(self.report_repo.as_ref(), id).await
    }

    async fn get_for_technician(&self, id: i64, teknisi_id: i64) -> ReportResult<ServiceReport> {
        access::load_for_technician(self.report_repo.as_ref(), id, teknisi_id).await
    }

    async fn get_for_actor(&self, id: i64, actor: Actor) -> ReportResult<ServiceReport> {
        access::load_for_actor(self.report_repo.as_ref(), id, &actor).await
    }

    async fn status_history(&self, id: i64, actor: Actor) -> ReportResult<Vec<StatusLog>> {
        let report = self.find(id).await?;
        access::ensure_can_access(&actor, &report)?;
        Ok(self.status_log_repo.get_all_by_report(id).await?)
    }

    async fn save_technician_payload(
        &self,
        id: i64,
        teknisi_id: i64,
        payload: Value,
    ) -> ReportResult<ServiceReport> {
        let mut report =
            access::load_for_technician(self.report_repo.as_ref(), id, teknisi_id).await?;
        if report.status.is_done() {
            tracing::debug!("Technician {teknisi_id} writes payload of done report {id}");
        }
        let extraction = self.media_extractor.extract(id, report.status, payload).await;
        let now = Utc::now();
        self.report_repo
            .update(DbServiceReport {
                id: DbField::Unchanged(id),
                teknisi_payload: DbField::Set(Some(extraction.payload.clone())),
                updated_at: DbField::Set(now),
                ..Default::default()
            })
            .await?;
        self.report_repo.save_changed().await?;

        report.teknisi_payload = Some(extraction.payload);
        report.updated_at = now;
        Ok(report)
    }

    async fn assign(
        &self,
        report_id: i64,
        teknisi_id: i64,
        admin_id: i64,
    ) -> ReportResult<ServiceReport> {
        let mut report = self.find(report_id).await?;
        let from = report.status;
        let to = match from {
            ReportStatus::Open => ReportStatus::Progress,
            other => other,
        };
        let now = Utc::now();

        self.report_repo
            .update(DbServiceReport {
                id: DbField::Unchanged(report_id),
                teknisi_id: DbField::Set(Some(teknisi_id)),
                status: DbField::Set(to),
                updated_at: DbField::Set(now),
                ..Default::default()
            })
            .await?;
        self.status_log_repo
            .insert(&StatusLog::transition(report_id, admin_id, from, to, ASSIGN_NOTE))
            .await?;
        self.report_repo.save_changed().await?;
        tracing::info!(
            "Report {report_id} assigned to technician {teknisi_id} by admin {admin_id} ({from} -> {to})"
        );

        report.teknisi_id = Some(teknisi_id);
        report.status = to;
        report.updated_at = now;
        Ok(report)
    }

    async fn update_progress(
        &self,
        command: UpdateProgressCommand,
    ) -> ReportResult<ServiceReport> {
        let report_id = command.report_id;
        let mut report =
            access::load_for_technician(self.report_repo.as_ref(), report_id, command.teknisi_id)
                .await?;
        let from = report.status;
        let to = ReportStatus::from(command.status);
        if from.is_done() && !to.is_done() {
            tracing::warn!("Report {report_id} moves back from done to {to}");
        }
        let now = Utc::now();
        let completed_at = to.is_done().then_some(now);

        self.report_repo
            .update(DbServiceReport {
                id: DbField::Unchanged(report_id),
                action_taken: DbField::Set(command.action_taken.clone()),
                status: DbField::Set(to),
                completed_at: DbField::Set(completed_at),
                updated_at: DbField::Set(now),
                ..Default::default()
            })
            .await?;
        self.status_log_repo
            .insert(&StatusLog::transition(
                report_id,
                command.teknisi_id,
                from,
                to,
                &progress_note(&command.job_summary),
            ))
            .await?;
        self.report_repo.save_changed().await?;
        tracing::info!(
            "Report {report_id} updated by technician {} ({from} -> {to})",
            command.teknisi_id
        );

        report.action_taken = command.action_taken;
        report.status = to;
        report.completed_at = completed_at;
        report.updated_at = now;
        Ok(report)
    }
}
