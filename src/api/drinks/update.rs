use super::{mutation_error, parse_recipe, DetailListResponse, UpdateDrinkRequest};
use crate::auth::permissions::UpdateDrinks;
use crate::auth::Authorized;
use crate::errors::ApiError;
use crate::openapi::DRINKS_TAG;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use log::info;

/// Partial update: a present title or recipe replaces the stored value, an
/// absent field is left untouched. A present recipe goes through the same
/// validation as create.
#[utoipa::path(
    patch,
    path = "/drinks/{id}",
    tag = DRINKS_TAG,
    request_body = UpdateDrinkRequest,
    params(
        ("id" = i64, Path, description = "Identifier of the drink to update"),
        ("Authorization" = String, Header, description = "Bearer token with write:update"),
    ),
    responses(
        (status = 200, description = "The updated drink", body = DetailListResponse),
        (status = 401, description = "Missing or unverified credential"),
        (status = 403, description = "Permission not granted"),
        (status = 404, description = "No drink with this identifier"),
        (status = 422, description = "Invalid payload or persistence failure")
    )
)]
pub(crate) async fn update_drink_handler(
    State(state): State<AppState>,
    _auth: Authorized<UpdateDrinks>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateDrinkRequest>, JsonRejection>,
) -> Result<Json<DetailListResponse>, ApiError> {
    let Json(payload) = payload?;

    if payload.title.as_deref() == Some("") {
        return Err(ApiError::unprocessable_with("title must not be empty"));
    }
    let recipe = payload
        .recipe
        .as_ref()
        .map(parse_recipe)
        .transpose()?;

    let drink = state
        .store
        .update_drink(id, payload.title.as_deref(), recipe.as_deref())
        .await
        .map_err(mutation_error)?;
    info!("Updated drink {}", id);

    Ok(Json(DetailListResponse {
        success: true,
        drinks: vec![drink],
    }))
}
