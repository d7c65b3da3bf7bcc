use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::recipe::{NewRecipe, RecipeChangeset};
use crate::domain::types::{RecipeDescription, RecipeName, TypeConstraintError};

#[derive(Deserialize, Validate)]
pub struct CreateRecipeForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateRecipeFormPayload {
    pub name: RecipeName,
    pub description: RecipeDescription,
}

impl CreateRecipeFormPayload {
    pub fn into_new_recipe(self) -> NewRecipe {
        NewRecipe {
            name: self.name,
            description: self.description,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateRecipeFormError {
    #[error("Create recipe form validation failed: {0}")]
    Validation(String),
    #[error("Create recipe form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateRecipeFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateRecipeFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateRecipeForm> for CreateRecipeFormPayload {
    type Error = CreateRecipeFormError;

    fn try_from(value: CreateRecipeForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: RecipeName::new(value.name)?,
            description: RecipeDescription::new(value.description)?,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct EditRecipeForm {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "description cannot be empty"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditRecipeFormPayload {
    pub name: Option<RecipeName>,
    pub description: Option<RecipeDescription>,
}

impl EditRecipeFormPayload {
    pub fn into_changeset(self) -> RecipeChangeset {
        RecipeChangeset {
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Error)]
pub enum EditRecipeFormError {
    #[error("Edit recipe form validation failed: {0}")]
    Validation(String),
    #[error("Edit recipe form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for EditRecipeFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for EditRecipeFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<EditRecipeForm> for EditRecipeFormPayload {
    type Error = EditRecipeFormError;

    fn try_from(value: EditRecipeForm) -> Result<Self, Self::Error> {
        value.validate()?;

        if value.name.is_none() && value.description.is_none() {
            return Err(EditRecipeFormError::Validation(
                "at least one of name or description must be provided".to_string(),
            ));
        }

        Ok(Self {
            name: value.name.map(RecipeName::new).transpose()?,
            description: value.description.map(RecipeDescription::new).transpose()?,
        })
    }
}
