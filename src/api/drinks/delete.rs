use super::{mutation_error, DeleteResponse};
use crate::auth::permissions::DeleteDrinks;
use crate::auth::Authorized;
use crate::errors::ApiError;
use crate::openapi::DRINKS_TAG;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use log::info;

/// Destroys a drink by identifier and echoes the identifier back
#[utoipa::path(
    delete,
    path = "/drinks/{id}",
    tag = DRINKS_TAG,
    params(
        ("id" = i64, Path, description = "Identifier of the drink to delete"),
        ("Authorization" = String, Header, description = "Bearer token with write:delete"),
    ),
    responses(
        (status = 200, description = "The deleted identifier", body = DeleteResponse),
        (status = 401, description = "Missing or unverified credential"),
        (status = 403, description = "Permission not granted"),
        (status = 404, description = "No drink with this identifier"),
        (status = 422, description = "Persistence failure")
    )
)]
pub(crate) async fn delete_drink_handler(
    State(state): State<AppState>,
    _auth: Authorized<DeleteDrinks>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state
        .store
        .delete_drink(id)
        .await
        .map_err(mutation_error)?;
    info!("Deleted drink {}", id);

    Ok(Json(DeleteResponse {
        success: true,
        delete: id,
    }))
}
