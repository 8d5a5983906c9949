use actix_web::cookie::{Cookie, SameSite};
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use inkpost::services::likes::{is_liked, with_liked, LIKED_COOKIE};

use crate::web::helpers::{is_htmx, liked_cookie};
use crate::web::state::AppState;

#[post("/post/{id}/like")]
pub async fn like_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let target = format!("/post/{id}");
    let current = liked_cookie(&req);

    // Second like from the same browser is a no-op.
    if is_liked(current.as_deref(), id) {
        return redirect(&req, &target, None);
    }

    match state.api.like_post(id).await {
        Ok(()) => {
            let cookie = Cookie::build(LIKED_COOKIE, with_liked(current.as_deref(), id))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(actix_web::cookie::time::Duration::days(365))
                .finish();
            redirect(&req, &target, Some(cookie))
        }
        Err(e) => {
            log::error!("Like failed for {id}: {e}");
            HttpResponse::BadRequest().body("Like failed")
        }
    }
}

fn redirect(req: &HttpRequest, location: &str, cookie: Option<Cookie<'static>>) -> HttpResponse {
    let mut builder = if is_htmx(req) {
        let mut b = HttpResponse::Ok();
        b.insert_header(("HX-Redirect", location.to_string()));
        b
    } else {
        let mut b = HttpResponse::SeeOther();
        b.insert_header(("Location", location.to_string()));
        b
    };

    if let Some(cookie) = cookie {
        builder.cookie(cookie);
    }
    builder.finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(like_post);
}
