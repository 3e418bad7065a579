use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// One component of a drink's recipe. Only field presence is validated;
/// `parts` accepts any JSON number and round-trips without coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientEntry {
    pub name: String,
    pub color: String,
    #[schema(value_type = f64)]
    pub parts: Number,
}

/// The persisted drink entity, serialized as the full detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<IngredientEntry>,
}

/// Public summary projection: ingredient names are withheld
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DrinkSummary {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<IngredientSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientSummary {
    pub color: String,
    #[schema(value_type = f64)]
    pub parts: Number,
}

impl From<&Drink> for DrinkSummary {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id,
            title: drink.title.clone(),
            recipe: drink
                .recipe
                .iter()
                .map(|entry| IngredientSummary {
                    color: entry.color.clone(),
                    parts: entry.parts.clone(),
                })
                .collect(),
        }
    }
}
