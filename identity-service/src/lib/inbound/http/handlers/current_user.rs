use auth::AuthenticatedIdentity;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiSuccess;

/// Return the identity resolved by `require_active_user`.
pub async fn current_user(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> ApiSuccess<AuthenticatedIdentity> {
    ApiSuccess::new(StatusCode::OK, identity)
}
