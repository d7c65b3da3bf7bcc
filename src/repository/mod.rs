use crate::db::{DbConnection, DbPool};
use crate::domain::recipe::{NewRecipe, Recipe, RecipeChangeset};
use crate::domain::types::{RecipeId, RecipeName};

pub mod errors;
pub mod recipe;

pub use errors::{RepositoryError, RepositoryResult};

/// Default number of records returned by a recent-recipes listing.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing recipes.
#[derive(Debug, Clone)]
pub struct RecipeListQuery {
    /// Maximum number of records to return, newest first.
    pub limit: i64,
}

impl Default for RecipeListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl RecipeListQuery {
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }
}

/// Read-only operations for recipe entities.
pub trait RecipeReader {
    /// Retrieve a recipe by its identifier.
    fn get_recipe_by_id(&self, id: RecipeId) -> RepositoryResult<Option<Recipe>>;
    /// Retrieve a recipe by its normalized name.
    ///
    /// Names are stored lowercased, so an equality filter on the normalized
    /// name is a case-insensitive lookup.
    fn get_recipe_by_name(&self, name: &RecipeName) -> RepositoryResult<Option<Recipe>>;
    /// List recipes ordered by creation time, newest first.
    fn list_recipes(&self, query: RecipeListQuery) -> RepositoryResult<Vec<Recipe>>;
}

/// Write operations for recipe entities.
pub trait RecipeWriter {
    /// Persist a new recipe, returning the stored record with its assigned id.
    fn create_recipe(&self, recipe: &NewRecipe) -> RepositoryResult<Recipe>;
    /// Apply a partial update to a recipe, returning the number of rows modified.
    fn update_recipe(&self, id: RecipeId, changeset: &RecipeChangeset) -> RepositoryResult<usize>;
    /// Delete a recipe by id, returning the number of rows deleted.
    fn delete_recipe(&self, id: RecipeId) -> RepositoryResult<usize>;
}
