use serde::Deserialize;

use crate::domain::types::RecipeId;
use crate::dto::recipes::RecipeDto;
use crate::forms::recipes::{CreateRecipeFormPayload, EditRecipeFormPayload};
use crate::repository::{RecipeListQuery, RecipeReader, RecipeWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Query parameters accepted by the recent-recipes listing endpoint.
///
/// `count` is carried as a raw string: a malformed value then surfaces as a
/// service-level validation error with the same JSON body as every other
/// validation failure, instead of failing inside query extraction.
#[derive(Deserialize, Debug)]
pub struct ListRecentQueryParams {
    pub count: Option<String>,
}

fn parse_recipe_id(recipe_id: i32) -> ServiceResult<RecipeId> {
    RecipeId::new(recipe_id).map_err(|e| ServiceError::Validation(e.to_string()))
}

/// Fetch a single recipe by its identifier.
pub fn get_recipe<R>(recipe_id: i32, repo: &R) -> ServiceResult<RecipeDto>
where
    R: RecipeReader,
{
    let id = parse_recipe_id(recipe_id)?;

    match repo.get_recipe_by_id(id) {
        Ok(Some(recipe)) => Ok(recipe.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get recipe {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// List the most recently created recipes, newest first.
///
/// `count` defaults to [`crate::repository::DEFAULT_LIST_LIMIT`]. An empty
/// store yields an empty list rather than an error.
pub fn list_recent<R>(params: ListRecentQueryParams, repo: &R) -> ServiceResult<Vec<RecipeDto>>
where
    R: RecipeReader,
{
    let mut query = RecipeListQuery::default();
    if let Some(count) = &params.count {
        let count: i64 = count.parse().map_err(|_| {
            ServiceError::Validation("count must be a valid number".to_string())
        })?;
        if count < 1 {
            return Err(ServiceError::Validation(
                "count must be a positive number".to_string(),
            ));
        }
        query = query.limit(count);
    }

    match repo.list_recipes(query) {
        Ok(recipes) => Ok(recipes.into_iter().map(RecipeDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list recipes: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Create a new recipe after checking name uniqueness.
///
/// The duplicate lookup is advisory; the unique index on the normalized
/// name column catches concurrent creates that race past it.
pub fn create_recipe<R>(payload: CreateRecipeFormPayload, repo: &R) -> ServiceResult<RecipeDto>
where
    R: RecipeReader + RecipeWriter,
{
    match repo.get_recipe_by_name(&payload.name) {
        Ok(Some(_)) => return Err(ServiceError::Conflict),
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to check for duplicate recipe name: {e}");
            return Err(ServiceError::Persistence);
        }
    }

    let new_recipe = payload.into_new_recipe();
    match repo.create_recipe(&new_recipe) {
        Ok(recipe) => Ok(recipe.into()),
        Err(RepositoryError::UniqueViolation) => Err(ServiceError::Conflict),
        Err(e) => {
            log::error!("Failed to create recipe: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

/// Delete a recipe by its identifier.
pub fn delete_recipe<R>(recipe_id: i32, repo: &R) -> ServiceResult<bool>
where
    R: RecipeReader + RecipeWriter,
{
    let id = parse_recipe_id(recipe_id)?;

    match repo.get_recipe_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get recipe {id}: {e}");
            return Err(ServiceError::Persistence);
        }
    }

    match repo.delete_recipe(id) {
        Ok(0) => {
            log::error!("Delete of recipe {id} affected no rows");
            Err(ServiceError::Persistence)
        }
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete recipe {id}: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

/// Apply a partial update to an existing recipe.
///
/// A supplied name is re-checked for uniqueness against all other records;
/// matching the target's own id is not a conflict.
pub fn edit_recipe<R>(
    recipe_id: i32,
    payload: EditRecipeFormPayload,
    repo: &R,
) -> ServiceResult<bool>
where
    R: RecipeReader + RecipeWriter,
{
    let id = parse_recipe_id(recipe_id)?;

    match repo.get_recipe_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get recipe {id}: {e}");
            return Err(ServiceError::Persistence);
        }
    }

    if let Some(name) = &payload.name {
        match repo.get_recipe_by_name(name) {
            Ok(Some(existing)) if existing.id != id => return Err(ServiceError::Conflict),
            Ok(_) => {}
            Err(e) => {
                log::error!("Failed to check for duplicate recipe name: {e}");
                return Err(ServiceError::Persistence);
            }
        }
    }

    match repo.update_recipe(id, &payload.into_changeset()) {
        Ok(0) => {
            log::error!("Update of recipe {id} modified no rows");
            Err(ServiceError::Persistence)
        }
        Ok(_) => Ok(true),
        Err(RepositoryError::UniqueViolation) => Err(ServiceError::Conflict),
        Err(e) => {
            log::error!("Failed to update recipe {id}: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::Recipe;
    use crate::domain::types::{RecipeDescription, RecipeId, RecipeName, VoteCount};
    use crate::forms::recipes::{CreateRecipeForm, EditRecipeForm};
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_recipe(id: i32, name: &str, created_at_secs: i64) -> Recipe {
        Recipe {
            id: RecipeId::new(id).unwrap(),
            name: RecipeName::new(name).unwrap(),
            description: RecipeDescription::new("A perfectly serviceable dish.").unwrap(),
            created_at: DateTime::from_timestamp(created_at_secs, 0).unwrap().naive_utc(),
            thumbs_up: VoteCount::zero(),
            thumbs_down: VoteCount::zero(),
        }
    }

    fn create_payload(name: &str, description: &str) -> CreateRecipeFormPayload {
        CreateRecipeForm {
            name: name.to_string(),
            description: description.to_string(),
        }
        .try_into()
        .unwrap()
    }

    #[test]
    fn get_recipe_returns_stored_record() {
        let repo = TestRepository::new(vec![sample_recipe(1, "shakshuka", 0)]);

        let dto = get_recipe(1, &repo).unwrap();
        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, "shakshuka");
    }

    #[test]
    fn get_recipe_rejects_non_positive_id() {
        let repo = TestRepository::default();

        let err = get_recipe(0, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn get_recipe_reports_missing_record() {
        let repo = TestRepository::default();

        assert_eq!(get_recipe(7, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn create_then_get_round_trips_normalized_fields() {
        let repo = TestRepository::default();
        let payload = create_payload("  Chicken Tikka  ", "  Marinated, then grilled.  ");

        let created = create_recipe(payload, &repo).unwrap();
        assert_eq!(created.name, "chicken tikka");
        assert_eq!(created.description, "Marinated, then grilled.");
        assert_eq!(created.thumbs_up, 0);
        assert_eq!(created.thumbs_down, 0);

        let fetched = get_recipe(created.id, &repo).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn create_rejects_duplicate_names_case_insensitively() {
        let repo = TestRepository::default();

        create_recipe(create_payload("Pasta Carbonara", "Eggs, cheese, guanciale."), &repo)
            .unwrap();
        let err = create_recipe(
            create_payload("PASTA CARBONARA", "A different description entirely."),
            &repo,
        )
        .unwrap_err();
        assert_eq!(err, ServiceError::Conflict);
    }

    #[test]
    fn list_recent_returns_newest_first_with_limit() {
        let recipes = (1..=20)
            .map(|i| sample_recipe(i, &format!("recipe number {i}"), i64::from(i)))
            .collect();
        let repo = TestRepository::new(recipes);

        let listed = list_recent(
            ListRecentQueryParams {
                count: Some("5".to_string()),
            },
            &repo,
        )
        .unwrap();
        assert_eq!(listed.len(), 5);
        let names: Vec<_> = listed.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "recipe number 20",
                "recipe number 19",
                "recipe number 18",
                "recipe number 17",
                "recipe number 16",
            ]
        );
    }

    #[test]
    fn list_recent_defaults_to_ten() {
        let recipes = (1..=20)
            .map(|i| sample_recipe(i, &format!("recipe number {i}"), i64::from(i)))
            .collect();
        let repo = TestRepository::new(recipes);

        let listed = list_recent(ListRecentQueryParams { count: None }, &repo).unwrap();
        assert_eq!(listed.len(), 10);
    }

    #[test]
    fn list_recent_on_empty_store_returns_empty_list() {
        let repo = TestRepository::default();

        let listed = list_recent(ListRecentQueryParams { count: None }, &repo).unwrap();
        assert!(listed.is_empty());
    }

    #[test]
    fn list_recent_rejects_non_positive_count() {
        let repo = TestRepository::default();

        let err = list_recent(
            ListRecentQueryParams {
                count: Some("0".to_string()),
            },
            &repo,
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn list_recent_rejects_non_numeric_count() {
        let repo = TestRepository::default();

        let err = list_recent(
            ListRecentQueryParams {
                count: Some("plenty".to_string()),
            },
            &repo,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("count must be a valid number".to_string())
        );
    }

    #[test]
    fn edit_updates_only_supplied_fields() {
        let repo = TestRepository::new(vec![sample_recipe(1, "minestrone", 0)]);
        let payload: EditRecipeFormPayload = EditRecipeForm {
            name: None,
            description: Some("Vegetable soup with beans and pasta.".to_string()),
        }
        .try_into()
        .unwrap();

        assert!(edit_recipe(1, payload, &repo).unwrap());

        let updated = get_recipe(1, &repo).unwrap();
        assert_eq!(updated.name, "minestrone");
        assert_eq!(updated.description, "Vegetable soup with beans and pasta.");
    }

    #[test]
    fn edit_rejects_duplicate_name_of_other_recipe() {
        let repo = TestRepository::new(vec![
            sample_recipe(1, "minestrone", 0),
            sample_recipe(2, "ribollita", 1),
        ]);
        let payload: EditRecipeFormPayload = EditRecipeForm {
            name: Some("Minestrone".to_string()),
            description: None,
        }
        .try_into()
        .unwrap();

        let err = edit_recipe(2, payload, &repo).unwrap_err();
        assert_eq!(err, ServiceError::Conflict);
    }

    #[test]
    fn edit_allows_keeping_own_name() {
        let repo = TestRepository::new(vec![sample_recipe(1, "minestrone", 0)]);
        let payload: EditRecipeFormPayload = EditRecipeForm {
            name: Some("MINESTRONE".to_string()),
            description: Some("Same name, fresh description text.".to_string()),
        }
        .try_into()
        .unwrap();

        assert!(edit_recipe(1, payload, &repo).unwrap());
    }

    #[test]
    fn edit_missing_recipe_reports_not_found() {
        let repo = TestRepository::default();
        let payload: EditRecipeFormPayload = EditRecipeForm {
            name: Some("ratatouille".to_string()),
            description: None,
        }
        .try_into()
        .unwrap();

        assert_eq!(edit_recipe(5, payload, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn delete_missing_recipe_reports_not_found() {
        let repo = TestRepository::default();

        assert_eq!(delete_recipe(3, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn delete_then_get_reports_not_found() {
        let repo = TestRepository::new(vec![sample_recipe(1, "shakshuka", 0)]);

        assert!(delete_recipe(1, &repo).unwrap());
        assert_eq!(get_recipe(1, &repo).unwrap_err(), ServiceError::NotFound);
    }
}
