use auth::SessionError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::state::AppState;

/// Middleware that resolves the bearer token into an active identity and
/// adds it to request extensions as `AuthenticatedIdentity`.
pub async fn require_active_user(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .map(str::to_owned)
        .ok_or_else(|| {
            tracing::debug!("Missing or malformed Authorization header");
            ApiError::from(SessionError::Unauthenticated)
        })?;

    let identity = state.session_resolver.resolve(&token).await?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
