pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod detail;
pub(crate) mod list;
pub(crate) mod update;

use crate::errors::ApiError;
use crate::models::{Drink, DrinkSummary, IngredientEntry};
use crate::state::AppState;
use crate::store::StoreError;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Combines the drink catalog routes into a single router
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/drinks",
            get(list::list_drinks_handler).post(create::create_drink_handler),
        )
        .route("/drinks-detail", get(detail::drink_details_handler))
        .route(
            "/drinks/{id}",
            axum::routing::patch(update::update_drink_handler)
                .delete(delete::delete_drink_handler),
        )
}

/// Success envelope for the public summary listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SummaryListResponse {
    pub success: bool,
    pub drinks: Vec<DrinkSummary>,
}

/// Success envelope for detail listing, create, and update
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DetailListResponse {
    pub success: bool,
    pub drinks: Vec<Drink>,
}

/// Success envelope for delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeleteResponse {
    pub success: bool,
    pub delete: i64,
}

/// Create payload; both fields are required but parsed leniently so the
/// validation error owns the envelope
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateDrinkRequest {
    pub title: Option<String>,
    #[schema(value_type = Object)]
    pub recipe: Option<Value>,
}

/// Partial update payload
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateDrinkRequest {
    pub title: Option<String>,
    #[schema(value_type = Object)]
    pub recipe: Option<Value>,
}

/// Validates a wire recipe value and normalizes it to an entry list.
///
/// A list is validated entry-by-entry and must be non-empty; a single
/// object is promoted to a one-element list; any other shape is rejected.
/// Create and update share this exact normalization.
pub(crate) fn parse_recipe(value: &Value) -> Result<Vec<IngredientEntry>, ApiError> {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return Err(ApiError::unprocessable_with(
                    "recipe must contain at least one ingredient entry",
                ));
            }
            items
                .iter()
                .map(|item| parse_entry(item))
                .collect::<Result<Vec<_>, _>>()
        }
        Value::Object(_) => Ok(vec![parse_entry(value)?]),
        _ => Err(ApiError::unprocessable_with(
            "recipe must be an ingredient entry or a list of ingredient entries",
        )),
    }
}

fn parse_entry(value: &Value) -> Result<IngredientEntry, ApiError> {
    serde_json::from_value(value.clone())
        .map_err(|e| ApiError::unprocessable_with(format!("invalid ingredient entry: {}", e)))
}

/// Error mapping for mutating operations: a missing row is 404, any other
/// persistence failure is 422 with the write rolled back.
pub(crate) fn mutation_error(error: StoreError) -> ApiError {
    match error {
        StoreError::NotFound => ApiError::not_found(),
        other => ApiError::unprocessable_with(other.to_string()),
    }
}

/// Error mapping for read operations
pub(crate) fn read_error(error: StoreError) -> ApiError {
    match error {
        StoreError::NotFound => ApiError::not_found(),
        other => {
            log::error!("Store read failed: {}", other);
            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_object_promoted_to_list() {
        let recipe = parse_recipe(&json!({"name": "water", "color": "blue", "parts": 1})).unwrap();
        assert_eq!(recipe.len(), 1);
        assert_eq!(recipe[0].name, "water");
    }

    #[test]
    fn test_list_validated_entry_by_entry() {
        let value = json!([
            {"name": "espresso", "color": "brown", "parts": 1},
            {"name": "milk", "color": "white"}
        ]);
        let result = parse_recipe(&value);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(parse_recipe(&json!([])).is_err());
    }

    #[test]
    fn test_scalar_shape_rejected() {
        assert!(parse_recipe(&json!("water")).is_err());
        assert!(parse_recipe(&json!(42)).is_err());
        assert!(parse_recipe(&json!(null)).is_err());
    }

    #[test]
    fn test_extra_fields_tolerated() {
        let recipe =
            parse_recipe(&json!({"name": "water", "color": "blue", "parts": 1, "note": "still"}))
                .unwrap();
        assert_eq!(recipe[0].color, "blue");
    }
}
