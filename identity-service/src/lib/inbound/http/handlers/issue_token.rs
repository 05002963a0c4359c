use auth::Credential;
use auth::TokenResponse;
use axum::extract::State;
use axum::Form;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use crate::inbound::http::state::AppState;

/// OAuth2 password-grant style login.
///
/// Answers with the bare `{access_token, token_type}` object, outside the
/// `ApiResponseBody` envelope.
pub async fn issue_token(
    State(state): State<AppState>,
    Form(body): Form<IssueTokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let credential = Credential::new(body.username, body.password);

    state
        .token_issuer
        .issue_token(&credential)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

/// Form-encoded login body (`username`, `password`)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTokenRequest {
    username: String,
    password: String,
}
