use auth::AuthenticatedIdentity;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedItem {
    pub item_id: String,
    pub owner: String,
}

/// List the items owned by the identity resolved by `require_active_user`.
///
/// Every account owns the single placeholder item `Foo`.
pub async fn own_items(
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> ApiSuccess<Vec<OwnedItem>> {
    ApiSuccess::new(
        StatusCode::OK,
        vec![OwnedItem {
            item_id: "Foo".to_string(),
            owner: identity.username,
        }],
    )
}
