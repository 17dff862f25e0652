use std::sync::Arc;

use architecture::repository::DbField;
use chrono::Utc;
use domain_report::{
    command::{CreateReportCommand, CustomerInfo, DeviceInfo, UpdateProgressCommand},
    mock::{MockMediaExtractorService, MockReportRepo, MockStatusLogRepo},
    model::{
        entity::{DbServiceReport, ServiceReport, StatusLog},
        vo::{Actor, Extraction, ListFilter, ProgressStatus, ReportStatus, Role},
    },
    service::ReportService,
};
use mockall::predicate::eq;
use serde_json::json;
use service_report::ReportServiceImpl;

fn report(id: i64, status: ReportStatus, teknisi_id: Option<i64>) -> ServiceReport {
    let now = Utc::now();
    ServiceReport {
        id,
        dispatch_no: "20240301-101010-123".to_string(),
        admin_id: 1,
        teknisi_id,
        status,
        opened_at: now,
        updated_at: now,
        completed_at: status.is_done().then_some(now),
        form_payload: json!({}),
        ..Default::default()
    }
}

fn service(
    report_repo: MockReportRepo,
    status_log_repo: MockStatusLogRepo,
    media_extractor: MockMediaExtractorService,
) -> ReportServiceImpl {
    ReportServiceImpl::builder()
        .report_repo(Arc::new(report_repo))
        .status_log_repo(Arc::new(status_log_repo))
        .media_extractor(Arc::new(media_extractor))
        .build()
}

fn create_command() -> CreateReportCommand {
    CreateReportCommand {
        admin_id: 1,
        customer: CustomerInfo {
            name: "PT Sinar".to_string(),
            address: "Jl. Merdeka 1".to_string(),
            contact: "0812".to_string(),
        },
        device: DeviceInfo {
            name: "Chiller".to_string(),
            serial: "CH-01".to_string(),
            location: "Roof".to_string(),
        },
        complaint: "Not cooling".to_string(),
        form_payload: json!({ "beforeImage": "data:image/png;base64,iVBORw0KGgo=" }),
    }
}

fn progress_command(status: ProgressStatus) -> UpdateProgressCommand {
    UpdateProgressCommand {
        report_id: 3,
        teknisi_id: 5,
        status,
        job_summary: "Replaced compressor".to_string(),
        action_taken: "Compressor replaced".to_string(),
    }
}

#[tokio::test]
async fn test_create_rewrites_form_payload() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_insert_immediately()
        .withf(|report: &ServiceReport| {
            report.status == ReportStatus::Open
                && report.teknisi_id.is_none()
                && report.completed_at.is_none()
                && report.customer_name == "PT Sinar"
        })
        .times(1)
        .returning(|_| Ok(7));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.id == DbField::Unchanged(7)
                && update.form_payload
                    == DbField::Set(json!({ "beforeImage": "/uploads/images/7/draft/x.png" }))
        })
        .times(1)
        .returning(|_| Ok(()));
    report_repo.expect_save_changed().times(1).returning(|| Ok(true));

    let mut media_extractor = MockMediaExtractorService::new();
    media_extractor
        .expect_extract()
        .with(eq(7), eq(ReportStatus::Open), mockall::predicate::always())
        .times(1)
        .returning(|_, _, _| {
            Extraction::untouched(json!({ "beforeImage": "/uploads/images/7/draft/x.png" }))
        });

    let service = service(report_repo, MockStatusLogRepo::new(), media_extractor);
    let report = service.create(create_command()).await.unwrap();

    assert_eq!(report.id, 7);
    assert_eq!(report.status, ReportStatus::Open);
    assert_eq!(report.form_payload["beforeImage"], "/uploads/images/7/draft/x.png");
    let parts: Vec<&str> = report.dispatch_no.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 8);
    assert_eq!(parts[1].len(), 6);
    assert_eq!(parts[2].len(), 3);
}

#[tokio::test]
async fn test_create_survives_failed_payload_rewrite() {
    let mut report_repo = MockReportRepo::new();
    report_repo.expect_insert_immediately().returning(|_| Ok(8));
    report_repo
        .expect_update()
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("connection reset")));

    let mut media_extractor = MockMediaExtractorService::new();
    media_extractor
        .expect_extract()
        .returning(|_, _, _| Extraction::untouched(json!({ "beforeImage": "/uploads/a.png" })));

    let service = service(report_repo, MockStatusLogRepo::new(), media_extractor);
    let report = service.create(create_command()).await.unwrap();

    assert_eq!(report.id, 8);
    assert_eq!(report.form_payload, create_command().form_payload);
}

#[tokio::test]
async fn test_create_skips_update_without_images() {
    let mut report_repo = MockReportRepo::new();
    report_repo.expect_insert_immediately().returning(|_| Ok(9));
    report_repo.expect_update().never();

    let mut media_extractor = MockMediaExtractorService::new();
    media_extractor.expect_extract().returning(|_, _, payload| Extraction::untouched(payload));

    let mut command = create_command();
    command.form_payload = json!({ "notes": "no pictures" });
    let service = service(report_repo, MockStatusLogRepo::new(), media_extractor);
    let report = service.create(command).await.unwrap();
    assert_eq!(report.form_payload, json!({ "notes": "no pictures" }));
}

#[tokio::test]
async fn test_list_is_bounded() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_get_all_by_filter()
        .withf(|filter: &ListFilter, limit: &u64| {
            filter.status == Some(ReportStatus::Progress) && *limit == 200
        })
        .times(1)
        .returning(|_, _| Ok(vec![report(2, ReportStatus::Progress, Some(5))]));

    let service = service(report_repo, MockStatusLogRepo::new(), MockMediaExtractorService::new());
    let reports = service
        .list(ListFilter {
            status: Some(ReportStatus::Progress),
            admin_id: None,
        })
        .await
        .unwrap();
    assert_eq!(reports.len(), 1);
}

#[tokio::test]
async fn test_assign_open_report() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_find_by_id()
        .with(eq(3))
        .returning(|id| Ok(Some(report(id, ReportStatus::Open, None))));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.teknisi_id == DbField::Set(Some(5))
                && update.status == DbField::Set(ReportStatus::Progress)
        })
        .times(1)
        .returning(|_| Ok(()));
    report_repo.expect_save_changed().times(1).returning(|| Ok(true));

    let mut status_log_repo = MockStatusLogRepo::new();
    status_log_repo
        .expect_insert()
        .withf(|log: &StatusLog| {
            log.report_id == 3
                && log.changed_by == 1
                && log.from == ReportStatus::Open
                && log.to == ReportStatus::Progress
                && log.note == "Assigned technician"
        })
        .times(1)
        .returning(|_| Ok(()));

    let service = service(report_repo, status_log_repo, MockMediaExtractorService::new());
    let report = service.assign(3, 5, 1).await.unwrap();
    assert_eq!(report.status, ReportStatus::Progress);
    assert_eq!(report.teknisi_id, Some(5));
}

#[tokio::test]
async fn test_assign_done_report_keeps_status() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(report(id, ReportStatus::Done, Some(4)))));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.teknisi_id == DbField::Set(Some(5))
                && update.status == DbField::Set(ReportStatus::Done)
                && !update.completed_at.is_set()
        })
        .times(1)
        .returning(|_| Ok(()));
    report_repo.expect_save_changed().returning(|| Ok(true));

    let mut status_log_repo = MockStatusLogRepo::new();
    status_log_repo
        .expect_insert()
        .withf(|log: &StatusLog| log.from == ReportStatus::Done && log.to == ReportStatus::Done)
        .times(1)
        .returning(|_| Ok(()));

    let service = service(report_repo, status_log_repo, MockMediaExtractorService::new());
    let report = service.assign(3, 5, 1).await.unwrap();
    assert_eq!(report.status, ReportStatus::Done);
    assert_eq!(report.teknisi_id, Some(5));
    assert!(report.completed_at.is_some());
}

#[tokio::test]
async fn test_assign_progress_report_keeps_status() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_find_by_id()
        .with(eq(3))
        .returning(|id| Ok(Some(report(id, ReportStatus::Progress, Some(5)))));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.teknisi_id == DbField::Set(Some(7))
                && update.status == DbField::Set(ReportStatus::Progress)
        })
        .times(1)
        .returning(|_| Ok(()));
    report_repo.expect_save_changed().times(1).returning(|| Ok(true));

    let mut status_log_repo = MockStatusLogRepo::new();
    status_log_repo
        .expect_insert()
        .withf(|log: &StatusLog| {
            log.report_id == 3
                && log.changed_by == 2
                && log.from == ReportStatus::Progress
                && log.to == ReportStatus::Progress
                && log.note == "Assigned technician"
        })
        .times(1)
        .returning(|_| Ok(()));

    let service = service(report_repo, status_log_repo, MockMediaExtractorService::new());
    let report = service.assign(3, 7, 2).await.unwrap();
    assert_eq!(report.status, ReportStatus::Progress);
    assert_eq!(report.teknisi_id, Some(7));
}

#[tokio::test]
async fn test_assign_missing_report() {
    let mut report_repo = MockReportRepo::new();
    report_repo.expect_find_by_id().returning(|_| Ok(None));
    report_repo.expect_update().never();

    let service = service(report_repo, MockStatusLogRepo::new(), MockMediaExtractorService::new());
    let err = service.assign(404, 5, 1).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_progress_done_then_back() {
    let mut report_repo = MockReportRepo::new();
    let mut status_log_repo = MockStatusLogRepo::new();
    let mut seq = mockall::Sequence::new();

    report_repo
        .expect_get_with_media()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id| Ok(Some(report(id, ReportStatus::Progress, Some(5)))));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.status == DbField::Set(ReportStatus::Done)
                && matches!(update.completed_at, DbField::Set(Some(_)))
                && update.action_taken == DbField::Set("Compressor replaced".to_string())
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    status_log_repo
        .expect_insert()
        .withf(|log: &StatusLog| {
            log.changed_by == 5
                && log.from == ReportStatus::Progress
                && log.to == ReportStatus::Done
                && log.note == "Summary: Replaced compressor"
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    report_repo
        .expect_save_changed()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(true));

    report_repo
        .expect_get_with_media()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id| Ok(Some(report(id, ReportStatus::Done, Some(5)))));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.status == DbField::Set(ReportStatus::Progress)
                && update.completed_at == DbField::Set(None)
        })
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    status_log_repo
        .expect_insert()
        .withf(|log: &StatusLog| log.from == ReportStatus::Done && log.to == ReportStatus::Progress)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    report_repo
        .expect_save_changed()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|| Ok(true));

    let service = service(report_repo, status_log_repo, MockMediaExtractorService::new());

    let done = service.update_progress(progress_command(ProgressStatus::Done)).await.unwrap();
    assert_eq!(done.status, ReportStatus::Done);
    assert!(done.completed_at.is_some());
    assert_eq!(done.action_taken, "Compressor replaced");

    let reopened =
        service.update_progress(progress_command(ProgressStatus::Progress)).await.unwrap();
    assert_eq!(reopened.status, ReportStatus::Progress);
    assert!(reopened.completed_at.is_none());
}

#[tokio::test]
async fn test_update_progress_stays_in_progress() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_get_with_media()
        .with(eq(3))
        .times(1)
        .returning(|id| Ok(Some(report(id, ReportStatus::Progress, Some(5)))));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.status == DbField::Set(ReportStatus::Progress)
                && update.completed_at == DbField::Set(None)
                && update.action_taken == DbField::Set("Compressor replaced".to_string())
        })
        .times(1)
        .returning(|_| Ok(()));
    report_repo.expect_save_changed().times(1).returning(|| Ok(true));

    let mut status_log_repo = MockStatusLogRepo::new();
    status_log_repo
        .expect_insert()
        .withf(|log: &StatusLog| {
            log.report_id == 3
                && log.changed_by == 5
                && log.from == ReportStatus::Progress
                && log.to == ReportStatus::Progress
                && log.note == "Summary: Replaced compressor"
        })
        .times(1)
        .returning(|_| Ok(()));

    let service = service(report_repo, status_log_repo, MockMediaExtractorService::new());
    let report =
        service.update_progress(progress_command(ProgressStatus::Progress)).await.unwrap();
    assert_eq!(report.status, ReportStatus::Progress);
    assert_eq!(report.action_taken, "Compressor replaced");
    assert!(report.completed_at.is_none());
}

#[tokio::test]
async fn test_update_progress_by_other_technician() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_get_with_media()
        .returning(|id| Ok(Some(report(id, ReportStatus::Progress, Some(6)))));
    report_repo.expect_update().never();
    let mut status_log_repo = MockStatusLogRepo::new();
    status_log_repo.expect_insert().never();

    let service = service(report_repo, status_log_repo, MockMediaExtractorService::new());
    let err = service.update_progress(progress_command(ProgressStatus::Done)).await.unwrap_err();
    assert!(err.is_forbidden());
}

#[tokio::test]
async fn test_get_for_technician_scoping() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_get_with_media()
        .with(eq(3))
        .returning(|id| Ok(Some(report(id, ReportStatus::Progress, Some(5)))));
    report_repo.expect_get_with_media().with(eq(404)).returning(|_| Ok(None));

    let service = service(report_repo, MockStatusLogRepo::new(), MockMediaExtractorService::new());
    assert_eq!(service.get_for_technician(3, 5).await.unwrap().id, 3);
    assert!(service.get_for_technician(3, 6).await.unwrap_err().is_forbidden());
    assert!(service.get_for_technician(404, 5).await.unwrap_err().is_not_found());

    let admin = Actor::new(1, Role::Admin);
    assert_eq!(service.get_for_actor(3, admin).await.unwrap().id, 3);
    let stranger = Actor::new(6, Role::Teknisi);
    assert!(service.get_for_actor(3, stranger).await.unwrap_err().is_forbidden());
}

#[tokio::test]
async fn test_save_technician_payload_uses_current_status() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_get_with_media()
        .returning(|id| Ok(Some(report(id, ReportStatus::Done, Some(5)))));
    report_repo
        .expect_update()
        .withf(|update: &DbServiceReport| {
            update.teknisi_payload
                == DbField::Set(Some(json!({ "afterImage": "/uploads/images/3/finalized/a.png" })))
                && !update.status.is_set()
        })
        .times(1)
        .returning(|_| Ok(()));
    report_repo.expect_save_changed().times(1).returning(|| Ok(true));

    let mut media_extractor = MockMediaExtractorService::new();
    media_extractor
        .expect_extract()
        .withf(|id, status, _| *id == 3 && *status == ReportStatus::Done)
        .times(1)
        .returning(|_, _, _| {
            Extraction::untouched(json!({ "afterImage": "/uploads/images/3/finalized/a.png" }))
        });

    let service = service(report_repo, MockStatusLogRepo::new(), media_extractor);
    let report = service
        .save_technician_payload(3, 5, json!({ "afterImage": "data:image/png;base64,AAAA" }))
        .await
        .unwrap();
    assert_eq!(
        report.teknisi_payload.unwrap()["afterImage"],
        "/uploads/images/3/finalized/a.png"
    );
}

#[tokio::test]
async fn test_status_history_scoping() {
    let mut report_repo = MockReportRepo::new();
    report_repo
        .expect_find_by_id()
        .returning(|id| Ok(Some(report(id, ReportStatus::Progress, Some(5)))));
    let mut status_log_repo = MockStatusLogRepo::new();
    status_log_repo.expect_get_all_by_report().with(eq(3)).times(1).returning(|id| {
        Ok(vec![StatusLog::transition(
            id,
            1,
            ReportStatus::Open,
            ReportStatus::Progress,
            "Assigned technician",
        )])
    });

    let service = service(report_repo, status_log_repo, MockMediaExtractorService::new());
    let logs = service.status_history(3, Actor::new(1, Role::MasterAdmin)).await.unwrap();
    assert_eq!(logs.len(), 1);
    let err = service.status_history(3, Actor::new(6, Role::Teknisi)).await.unwrap_err();
    assert!(err.is_forbidden());
}
