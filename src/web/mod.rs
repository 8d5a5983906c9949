pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod middleware;
pub mod security;
pub mod state;
pub mod templates;

use actix_web::web;

pub use state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    handlers::public::configure(cfg);
    handlers::search::configure(cfg);
    handlers::comments::configure(cfg);
    handlers::likes::configure(cfg);
    handlers::admin::configure(cfg);
}
