use super::{read_error, SummaryListResponse};
use crate::errors::ApiError;
use crate::models::DrinkSummary;
use crate::openapi::DRINKS_TAG;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

/// Public summary listing. No auth gate; ingredient names are withheld.
/// An empty catalog is a 404, not an empty 200.
#[utoipa::path(
    get,
    path = "/drinks",
    tag = DRINKS_TAG,
    responses(
        (status = 200, description = "Summary list of all drinks", body = SummaryListResponse),
        (status = 404, description = "The catalog is empty")
    )
)]
pub(crate) async fn list_drinks_handler(
    State(state): State<AppState>,
) -> Result<Json<SummaryListResponse>, ApiError> {
    let drinks = state.store.list_drinks().await.map_err(read_error)?;
    if drinks.is_empty() {
        return Err(ApiError::not_found());
    }
    Ok(Json(SummaryListResponse {
        success: true,
        drinks: drinks.iter().map(DrinkSummary::from).collect(),
    }))
}
