mod attachment;
mod report;
mod status_log;

#[rustfmt::skip]
pub use {
    attachment::ReportAttachmentRepo,
    report::ReportRepo,
    status_log::StatusLogRepo,
};
