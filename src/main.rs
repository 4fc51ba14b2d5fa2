// src/main.rs

use std::str::FromStr;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use taskboard::app_state::AppState;
use taskboard::config::Config;
use taskboard::repository::TaskRepository;
use taskboard::task;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(std::io::Error::other)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(std::io::Error::other)?;

    let repository = TaskRepository::new(pool);
    repository.migrate().await.map_err(std::io::Error::other)?;

    info!("Server running at http://{}", config.bind_addr);
    info!("Allowed CORS Origin: {}", config.frontend_origin);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&config.frontend_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![http::header::CONTENT_TYPE, http::header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(AppState {
                repository: repository.clone(),
            }))
            .configure(task::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
