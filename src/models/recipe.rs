use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::recipe::{
    NewRecipe as DomainNewRecipe, Recipe as DomainRecipe, RecipeChangeset as DomainRecipeChangeset,
};
use crate::domain::types::{RecipeDescription, RecipeName, TypeConstraintError, VoteCount};

/// Diesel model representing the `recipes` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub thumbs_up: i32,
    pub thumbs_down: i32,
}

/// Insertable form of [`Recipe`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub thumbs_up: i32,
    pub thumbs_down: i32,
}

/// Partial update for [`Recipe`]; `None` fields are left untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<Recipe> for DomainRecipe {
    type Error = TypeConstraintError;

    fn try_from(recipe: Recipe) -> Result<Self, Self::Error> {
        Ok(Self {
            id: recipe.id.try_into()?,
            name: RecipeName::new(recipe.name)?,
            description: RecipeDescription::new(recipe.description)?,
            created_at: recipe.created_at,
            thumbs_up: VoteCount::new(recipe.thumbs_up)?,
            thumbs_down: VoteCount::new(recipe.thumbs_down)?,
        })
    }
}

impl From<DomainNewRecipe> for NewRecipe {
    fn from(recipe: DomainNewRecipe) -> Self {
        Self {
            name: recipe.name.into_inner(),
            description: recipe.description.into_inner(),
            created_at: recipe.created_at,
            thumbs_up: VoteCount::zero().get(),
            thumbs_down: VoteCount::zero().get(),
        }
    }
}

impl From<DomainRecipeChangeset> for RecipeChangeset {
    fn from(changeset: DomainRecipeChangeset) -> Self {
        Self {
            name: changeset.name.map(RecipeName::into_inner),
            description: changeset.description.map(RecipeDescription::into_inner),
        }
    }
}
