//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use tb_auth::extract_bearer;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// The authenticated user, extracted from the `Authorization: Bearer`
/// header. Rejects with 401 when the header is missing or the token does
/// not validate.
pub struct CurrentUser(pub Uuid);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get("authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

            let token = extract_bearer(header_value)?;
            let claims = state.validator.validate(token)?;

            let user_id = Uuid::parse_str(&claims.sub)
                .map_err(|_| ApiError::unauthorized("Token subject is not a valid user id"))?;

            Ok(CurrentUser(user_id))
        }
    }
}
