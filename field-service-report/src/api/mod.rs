use actix_web::{web, HttpResponse};
use architecture::ResponseBase;
use serde::Serialize;

pub mod attachment;
pub mod dtos;
mod error;
pub mod report;
mod requester;
pub mod uploads;

pub use error::{ApiError, ApiResult};
pub use requester::Requester;

fn ok<T: Serialize>(content: T) -> HttpResponse {
    HttpResponse::Ok().json(ResponseBase::ok(Some(content)))
}

fn created<T: Serialize>(content: T) -> HttpResponse {
    HttpResponse::Created().json(ResponseBase::created(Some(content)))
}

/// Forms carry their photos inline, so JSON bodies get the same bound as multipart uploads.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|e, _| ApiError::bad_request(e.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|e, _| ApiError::bad_request(e.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|e, _| ApiError::bad_request(e.to_string()).into())
}
