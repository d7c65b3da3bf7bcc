use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{RecipeDescription, RecipeId, RecipeName, VoteCount};

/// A stored recipe record.
///
/// This domain struct mirrors the `recipes` table and is independent from
/// any persistence layer representation. The name is always lowercase and
/// trimmed; uniqueness is enforced case-insensitively across the whole
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: RecipeName,
    pub description: RecipeDescription,
    pub created_at: NaiveDateTime,
    pub thumbs_up: VoteCount,
    pub thumbs_down: VoteCount,
}

/// Data required to insert a new [`Recipe`].
///
/// Vote counters are zeroed at insertion time; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRecipe {
    pub name: RecipeName,
    pub description: RecipeDescription,
    pub created_at: NaiveDateTime,
}

/// Partial update applied to an existing [`Recipe`].
///
/// Only the fields present are written; absent fields are left untouched in
/// the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeChangeset {
    pub name: Option<RecipeName>,
    pub description: Option<RecipeDescription>,
}

impl RecipeChangeset {
    /// Returns `true` when the changeset would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
