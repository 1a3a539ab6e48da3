use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    services::token_service::extract_bearer,
    state::AppState,
};

/// Legacy clients send the raw token in this header instead of `Authorization`.
const TOKEN_HEADER: &str = "token";

/// Reject requests without a valid access token.
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_or_token_header(&req)
        .ok_or_else(|| AppError::Unauthorized("No Authorization header provided".into()))?;

    let claims = state.tokens.validate(token).map_err(|err| {
        tracing::warn!(error = %err, uri = %req.uri(), "token rejected");
        err
    })?;

    tracing::debug!(uid = %claims.uid, email = %claims.email, "authenticated request");
    Ok(next.run(req).await)
}

// A non-bearer `Authorization` value does not hide the `token` header.
fn bearer_or_token_header(req: &Request) -> Option<&str> {
    let headers = req.headers();
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(extract_bearer)
        .or_else(|| {
            headers
                .get(TOKEN_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
}
