use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use architecture::ResponseBase;
use domain_report::exception::ReportException;

pub type ApiResult<T = HttpResponse> = Result<T, ApiError>;

/// Error answered to the client, wrapped in a [`ResponseBase`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status)
            .json(ResponseBase::<()>::err(self.status.as_u16() as i32, &self.message))
    }
}

impl From<ReportException> for ApiError {
    fn from(e: ReportException) -> Self {
        match e {
            ReportException::NotFound { .. } | ReportException::AttachmentNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, e.to_string())
            }
            ReportException::Forbidden { .. } => Self::new(StatusCode::FORBIDDEN, e.to_string()),
            ReportException::InternalError { source } => {
                tracing::error!("{source:?}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}
