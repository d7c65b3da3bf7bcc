use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::recipe::Recipe;

/// Serializable recipe representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub thumbs_up: i32,
    pub thumbs_down: i32,
}

impl From<Recipe> for RecipeDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.get(),
            name: recipe.name.into_inner(),
            description: recipe.description.into_inner(),
            created_at: recipe.created_at,
            thumbs_up: recipe.thumbs_up.get(),
            thumbs_down: recipe.thumbs_down.get(),
        }
    }
}
