use diesel::prelude::*;

use crate::domain::recipe::{NewRecipe, Recipe, RecipeChangeset};
use crate::domain::types::{RecipeId, RecipeName};
use crate::models::recipe::{
    NewRecipe as DbNewRecipe, Recipe as DbRecipe, RecipeChangeset as DbRecipeChangeset,
};
use crate::repository::{
    DieselRepository, RecipeListQuery, RecipeReader, RecipeWriter, RepositoryResult,
};

impl RecipeReader for DieselRepository {
    fn get_recipe_by_id(&self, id: RecipeId) -> RepositoryResult<Option<Recipe>> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;

        let recipe = recipes::table
            .filter(recipes::id.eq(id.get()))
            .first::<DbRecipe>(&mut conn)
            .optional()?;

        let recipe = recipe.map(TryInto::try_into).transpose()?;
        Ok(recipe)
    }

    fn get_recipe_by_name(&self, name: &RecipeName) -> RepositoryResult<Option<Recipe>> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;

        let recipe = recipes::table
            .filter(recipes::name.eq(name.as_str()))
            .first::<DbRecipe>(&mut conn)
            .optional()?;

        let recipe = recipe.map(TryInto::try_into).transpose()?;
        Ok(recipe)
    }

    fn list_recipes(&self, query: RecipeListQuery) -> RepositoryResult<Vec<Recipe>> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;

        let items = recipes::table
            .order(recipes::created_at.desc())
            .limit(query.limit)
            .load::<DbRecipe>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Recipe>, _>>()?;

        Ok(items)
    }
}

impl RecipeWriter for DieselRepository {
    fn create_recipe(&self, recipe: &NewRecipe) -> RepositoryResult<Recipe> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;
        let db_recipe: DbNewRecipe = recipe.clone().into();

        let inserted = diesel::insert_into(recipes::table)
            .values(db_recipe)
            .get_result::<DbRecipe>(&mut conn)?;

        Ok(inserted.try_into()?)
    }

    fn update_recipe(&self, id: RecipeId, changeset: &RecipeChangeset) -> RepositoryResult<usize> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;
        let db_changeset: DbRecipeChangeset = changeset.clone().into();

        let affected = diesel::update(recipes::table.filter(recipes::id.eq(id.get())))
            .set(db_changeset)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_recipe(&self, id: RecipeId) -> RepositoryResult<usize> {
        use crate::schema::recipes;

        let mut conn = self.conn()?;

        let affected = diesel::delete(recipes::table.filter(recipes::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
