use super::{mutation_error, parse_recipe, CreateDrinkRequest, DetailListResponse};
use crate::auth::permissions::CreateDrinks;
use crate::auth::Authorized;
use crate::errors::ApiError;
use crate::openapi::DRINKS_TAG;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use log::info;

/// Creates a drink from a required title and validated recipe; the new
/// record is returned as a one-element detail list.
#[utoipa::path(
    post,
    path = "/drinks",
    tag = DRINKS_TAG,
    request_body = CreateDrinkRequest,
    params(
        ("Authorization" = String, Header, description = "Bearer token with write:create"),
    ),
    responses(
        (status = 200, description = "The newly created drink", body = DetailListResponse),
        (status = 401, description = "Missing or unverified credential"),
        (status = 403, description = "Permission not granted"),
        (status = 422, description = "Invalid payload or persistence failure")
    )
)]
pub(crate) async fn create_drink_handler(
    State(state): State<AppState>,
    _auth: Authorized<CreateDrinks>,
    payload: Result<Json<CreateDrinkRequest>, JsonRejection>,
) -> Result<Json<DetailListResponse>, ApiError> {
    let Json(payload) = payload?;

    let title = payload
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::unprocessable_with("title is required"))?;
    let recipe_value = payload
        .recipe
        .ok_or_else(|| ApiError::unprocessable_with("recipe is required"))?;
    let recipe = parse_recipe(&recipe_value)?;

    let drink = state
        .store
        .create_drink(&title, &recipe)
        .await
        .map_err(mutation_error)?;
    info!("Created drink {} ({})", drink.id, drink.title);

    Ok(Json(DetailListResponse {
        success: true,
        drinks: vec![drink],
    }))
}
