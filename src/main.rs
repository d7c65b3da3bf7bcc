use std::env;
use std::io;

use actix_web::{App, HttpServer, web};

use recipe_api::db::establish_connection_pool;
use recipe_api::models::config::ServerConfig;
use recipe_api::repository::DieselRepository;
use recipe_api::routes::recipes::{
    create_recipe, delete_recipe, edit_recipe, get_recipe, list_recipes,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig {
        database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "recipes.db".to_string()),
        bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
    };

    let pool = establish_connection_pool(&config.database_url)
        .map_err(|e| io::Error::other(format!("Failed to establish database pool: {e}")))?;
    let repo = DieselRepository::new(pool);

    log::info!("Starting recipe API server on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .service(get_recipe)
            .service(list_recipes)
            .service(create_recipe)
            .service(edit_recipe)
            .service(delete_recipe)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
