//! Caller identity extractor

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use flagdesk_domain::constants::CALLER_UID_HEADER;
use flagdesk_domain::{Caller, Uid};

use crate::error::ApiError;

/// Caller resolved from the `x-uid` header set by the upstream session layer.
///
/// Rejects with 401 when the header is missing or not a numeric uid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedCaller(pub Caller);

impl<S> FromRequestParts<S> for AuthenticatedCaller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(CALLER_UID_HEADER)
            .ok_or_else(|| ApiError::Unauthorized(format!("missing {CALLER_UID_HEADER} header")))?
            .to_str()
            .map_err(|_| ApiError::Unauthorized(format!("unreadable {CALLER_UID_HEADER} header")))?;

        let uid = raw.parse::<Uid>().map_err(ApiError::Unauthorized)?;
        Ok(Self(Caller::new(uid)))
    }
}
