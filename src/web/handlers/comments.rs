use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use std::time::Duration;
use uuid::Uuid;

use inkpost::models::CommentCreate;

use crate::web::forms::{CommentForm, CommentModerationForm};
use crate::web::helpers::{require_admin, see_other};
use crate::web::state::AppState;

#[post("/post/{id}/comments")]
pub async fn comment_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<CommentForm>,
) -> impl Responder {
    let post_id = path.into_inner();

    // Rate limiting
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.check_rate_limit(
        &format!("comment:{}", client_ip),
        5,                       // 5 comments
        Duration::from_secs(60), // per minute
    ) {
        return HttpResponse::TooManyRequests().body("Too many comments, slow down");
    }

    let author = form.author.trim().to_string();
    let content = form.content.trim().to_string();

    if author.is_empty() || content.is_empty() {
        return HttpResponse::BadRequest().body("Name and comment are required");
    }

    match state
        .api
        .create_comment(post_id, &CommentCreate { author, content })
        .await
    {
        Ok(_) => see_other(&req, &format!("/post/{post_id}")),
        Err(e) => {
            log::error!("Comment create failed on {post_id}: {e}");
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body("Comment could not be posted")
        }
    }
}

#[post("/comments/{id}/delete")]
pub async fn comment_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<CommentModerationForm>,
) -> impl Responder {
    let id = path.into_inner();
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match state.api.delete_comment(&session, id).await {
        Ok(()) => see_other(&req, &format!("/post/{}", form.post_id)),
        Err(e) => {
            log::error!("Comment delete failed for {id}: {e}");
            HttpResponse::BadRequest().body("Delete failed")
        }
    }
}

#[post("/comments/{id}/ban")]
pub async fn comment_ban(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<CommentModerationForm>,
) -> impl Responder {
    let id = path.into_inner();
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match state.api.ban_comment(&session, id).await {
        Ok(()) => see_other(&req, &format!("/post/{}", form.post_id)),
        Err(e) => {
            log::error!("Comment ban failed for {id}: {e}");
            HttpResponse::BadRequest().body("Ban failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(comment_create)
        .service(comment_delete)
        .service(comment_ban);
}
