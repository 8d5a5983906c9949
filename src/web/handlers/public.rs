use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use inkpost::common::ApiError;
use inkpost::services::{likes, similar, tags};

use crate::web::helpers::{forwarded_cookies, liked_cookie, render};
use crate::web::state::AppState;
use crate::web::templates::{PublicIndexTemplate, PublicPostTemplate, PublicTagTemplate};

#[get("/")]
pub async fn public_index(state: web::Data<AppState>) -> impl Responder {
    match state.api.list_posts().await {
        Ok(posts) => render(PublicIndexTemplate {
            posts,
            error: String::new(),
        }),
        Err(e) => {
            log::error!("Failed to load post list: {e}");
            render(PublicIndexTemplate {
                posts: vec![],
                error: "Posts could not be loaded right now.".to_string(),
            })
        }
    }
}

#[get("/post/{id}")]
pub async fn public_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    let post = match state.api.get_post(id).await {
        Ok(post) => post,
        Err(ApiError::Status(status)) if status == reqwest::StatusCode::NOT_FOUND => {
            return HttpResponse::NotFound().body("Not found");
        }
        Err(e) => {
            log::error!("Failed to load post {id}: {e}");
            return HttpResponse::InternalServerError().body("Post could not be loaded");
        }
    };

    // The sidebar widgets degrade to empty rather than failing the page.
    let all = state.api.list_posts().await.unwrap_or_else(|e| {
        log::error!("Similar-posts fetch failed for {id}: {e}");
        vec![]
    });
    let comments = state.api.comments_for_post(id).await.unwrap_or_else(|e| {
        log::error!("Comment fetch failed for {id}: {e}");
        vec![]
    });

    let auth = state.api.auth_me(forwarded_cookies(&req).as_deref()).await;
    let similar = similar::similar_posts(&post, &all);
    let liked = likes::is_liked(liked_cookie(&req).as_deref(), id);
    let stars = tags::quality_stars(&post.tags);

    render(PublicPostTemplate {
        post,
        stars,
        similar,
        comments,
        liked,
        is_admin: auth.admin,
    })
}

#[get("/tag/{tag}")]
pub async fn public_tag(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let tag = path.into_inner();
    let (title, accent) = theme_for(&tag);

    match state.api.posts_by_tag(&tag).await {
        Ok(posts) => render(PublicTagTemplate {
            tag,
            title,
            accent,
            posts,
            error: String::new(),
        }),
        Err(e) => {
            log::error!("Failed to load posts for tag {tag}: {e}");
            render(PublicTagTemplate {
                tag,
                title,
                accent,
                posts: vec![],
                error: "Posts could not be loaded right now.".to_string(),
            })
        }
    }
}

/// Decorative theming for the well-known category pages. Unknown tags fall
/// back to a neutral look with the tag itself as the heading.
fn theme_for(tag: &str) -> (String, &'static str) {
    match tag {
        "projects" => ("Projects".to_string(), "theme-amber"),
        "games" => ("Games".to_string(), "theme-violet"),
        "music" => ("Music".to_string(), "theme-rose"),
        "travel" => ("Travel".to_string(), "theme-teal"),
        "code" => ("Code & Tinkering".to_string(), "theme-emerald"),
        other => (capitalize(other), "theme-slate"),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(public_index)
        .service(public_post)
        .service(public_tag);
}
