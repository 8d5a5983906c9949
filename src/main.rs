mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use std::sync::Arc;

use inkpost::api::BackendClient;

use crate::web::security::RateLimiter;
use crate::web::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let api_url = std::env::var("API_URL")
        .expect("API_URL must be set (base URL of the blog REST API, e.g. https://api.example.com)");

    let state = Data::new(AppState {
        api: BackendClient::new(&api_url),
        rate_limiter: Arc::new(RateLimiter::new()),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(web::middleware::SecurityHeaders)
            .configure(web::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()))?
    .run()
    .await
}
