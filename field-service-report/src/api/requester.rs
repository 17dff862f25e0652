use actix_web::{dev::Payload, http::header::HeaderMap, FromRequest, HttpRequest};
use domain_report::model::vo::{Actor, Role};
use futures::future::{ready, Ready};

use super::ApiError;

/// Set by the authenticating gateway in front of the service.
pub const ACTOR_ID_HEADER: &str = "X-Actor-Id";
pub const ACTOR_ROLE_HEADER: &str = "X-Actor-Role";

/// Caller of a request.
pub struct Requester(pub Actor);

impl FromRequest for Requester {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(actor_from_headers(req.headers()).map(Requester))
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ApiError> {
    headers
        .get(name)
        .ok_or_else(|| ApiError::unauthorized(format!("No {name} header.")))?
        .to_str()
        .map_err(|e| ApiError::unauthorized(format!("{name} header is invalid: {e}")))
}

fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let id = header(headers, ACTOR_ID_HEADER)?
        .trim()
        .parse::<i64>()
        .map_err(|e| ApiError::unauthorized(format!("{ACTOR_ID_HEADER} header is invalid: {e}")))?;
    let role = header(headers, ACTOR_ROLE_HEADER)?
        .trim()
        .to_uppercase()
        .parse::<Role>()
        .map_err(|e| ApiError::unauthorized(e.to_string()))?;
    Ok(Actor::new(id, role))
}
