use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::recipes::{
    CreateRecipeForm, CreateRecipeFormPayload, EditRecipeForm, EditRecipeFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::recipes::{
    ListRecentQueryParams, create_recipe as create_recipe_service,
    delete_recipe as delete_recipe_service, edit_recipe as edit_recipe_service,
    get_recipe as get_recipe_service, list_recent as list_recent_service,
};

#[get("/v1/recipes/{recipe_id}")]
pub async fn get_recipe(
    recipe_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_recipe_service(recipe_id.into_inner(), repo.get_ref()) {
        Ok(recipe) => HttpResponse::Ok().json(recipe),
        Err(err) => error_response(err),
    }
}

#[get("/v1/recipes")]
pub async fn list_recipes(
    params: web::Query<ListRecentQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_recent_service(params.into_inner(), repo.get_ref()) {
        Ok(recipes) => HttpResponse::Ok().json(recipes),
        Err(err) => error_response(err),
    }
}

#[post("/v1/recipes")]
pub async fn create_recipe(
    web::Json(form): web::Json<CreateRecipeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: CreateRecipeFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match create_recipe_service(payload, repo.get_ref()) {
        Ok(recipe) => HttpResponse::Created().json(recipe),
        Err(err) => error_response(err),
    }
}

#[put("/v1/recipes/{recipe_id}")]
pub async fn edit_recipe(
    recipe_id: web::Path<i32>,
    web::Json(form): web::Json<EditRecipeForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: EditRecipeFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match edit_recipe_service(recipe_id.into_inner(), payload, repo.get_ref()) {
        Ok(edited) => HttpResponse::Ok().json(edited),
        Err(err) => error_response(err),
    }
}

#[delete("/v1/recipes/{recipe_id}")]
pub async fn delete_recipe(
    recipe_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_recipe_service(recipe_id.into_inner(), repo.get_ref()) {
        Ok(deleted) => HttpResponse::Ok().json(deleted),
        Err(err) => error_response(err),
    }
}
