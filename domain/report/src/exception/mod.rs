pub type ReportResult<T> = Result<T, ReportException>;

#[derive(Debug, thiserror::Error)]
pub enum ReportException {
    #[error("Report with id: {report_id} can't be found.")]
    NotFound { report_id: i64 },

    #[error("Attachment with id: {attachment_id} can't be found in report: {report_id}.")]
    AttachmentNotFound { report_id: i64, attachment_id: i64 },

    /// The entity exists but the caller may not touch it, or a business rule blocks the action.
    #[error("Forbidden: {reason}.")]
    Forbidden { reason: String },

    #[error("Report internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl ReportException {
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::AttachmentNotFound { .. })
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}

impl From<anyhow::Error> for ReportException {
    fn from(e: anyhow::Error) -> Self {
        ReportException::InternalError { source: e }
    }
}

impl From<std::io::Error> for ReportException {
    fn from(e: std::io::Error) -> Self {
        ReportException::InternalError { source: e.into() }
    }
}
