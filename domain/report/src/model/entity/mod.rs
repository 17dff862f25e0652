pub mod attachment;
pub mod photo;
pub mod service_report;
pub mod status_log;

#[rustfmt::skip]
pub use {
    attachment::ReportAttachment,
    photo::{PhotoType, ReportPhoto},
    service_report::{DbServiceReport, ServiceReport},
    status_log::StatusLog,
};
