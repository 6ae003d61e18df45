use axum::{
    RequestPartsExt,
    extract::Request,
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::http::server::api_entities::api_error::ApiErrorResponse;

/// Caller's OAuth access token, forwarded untouched to the inventory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token not found")]
    TokenNotFound,
    #[error("Invalid token")]
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let body = ApiErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    let token = bearer.token().trim();
    if token.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    Ok(token.to_string())
}

/// Requires a bearer token and exposes it to handlers as [`BearerToken`].
///
/// The token is not validated here; the identity provider and the inventory
/// service own that.
pub async fn auth(req: Request, next: Next) -> Result<Response, AuthError> {
    let (mut parts, body) = req.into_parts();
    let token = extract_token_from_bearer(&mut parts).await.inspect_err(|e| {
        tracing::debug!("Rejecting request to {}: {}", parts.uri, e);
    })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}
