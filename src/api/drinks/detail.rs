use super::{read_error, DetailListResponse};
use crate::auth::permissions::ReadDrinkDetails;
use crate::auth::Authorized;
use crate::errors::ApiError;
use crate::openapi::DRINKS_TAG;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use log::debug;

/// Full detail listing for staff holding `read:details`
#[utoipa::path(
    get,
    path = "/drinks-detail",
    tag = DRINKS_TAG,
    params(
        ("Authorization" = String, Header, description = "Bearer token with read:details"),
    ),
    responses(
        (status = 200, description = "Detail list of all drinks", body = DetailListResponse),
        (status = 401, description = "Missing or unverified credential"),
        (status = 403, description = "Permission not granted"),
        (status = 404, description = "The catalog is empty")
    )
)]
pub(crate) async fn drink_details_handler(
    State(state): State<AppState>,
    auth: Authorized<ReadDrinkDetails>,
) -> Result<Json<DetailListResponse>, ApiError> {
    debug!(
        "Drink details requested by {}",
        auth.claims.sub.as_deref().unwrap_or("<unknown>")
    );
    let drinks = state.store.list_drinks().await.map_err(read_error)?;
    if drinks.is_empty() {
        return Err(ApiError::not_found());
    }
    Ok(Json(DetailListResponse {
        success: true,
        drinks,
    }))
}
