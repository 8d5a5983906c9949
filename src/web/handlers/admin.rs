use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use futures_util::StreamExt as _;
use uuid::Uuid;

use inkpost::models::{PostCreate, PostUpdate};

use crate::web::forms::AdminPostForm;
use crate::web::helpers::{render, require_admin, see_other};
use crate::web::state::AppState;
use crate::web::templates::{AdminDashboardTemplate, AdminEditTemplate, AdminNewTemplate};

#[get("/admin")]
pub async fn admin_dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match state.api.admin_posts(&session).await {
        Ok(posts) => render(AdminDashboardTemplate {
            posts,
            error: String::new(),
        }),
        Err(e) => {
            log::error!("Admin post list failed: {e}");
            render(AdminDashboardTemplate {
                posts: vec![],
                error: "Posts could not be loaded right now.".to_string(),
            })
        }
    }
}

#[get("/admin/new")]
pub async fn admin_new(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_admin(state.get_ref(), &req).await {
        return resp;
    }

    render(AdminNewTemplate {
        error: String::new(),
    })
}

#[post("/admin/posts")]
pub async fn admin_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<AdminPostForm>,
) -> impl Responder {
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let title = form.title.trim().to_string();
    if title.is_empty() {
        return render(AdminNewTemplate {
            error: "Title is required".to_string(),
        });
    }

    let data = PostCreate {
        title,
        content: form.content.clone(),
        tags: form.split_tags(),
        image: form.image_or_none(),
        kind: form.kind.trim().to_string(),
        visibility: form.visibility.trim().to_string(),
    };

    match state.api.create_post(&session, &data).await {
        Ok(created) => see_other(&req, &format!("/admin/edit/{}", created.id)),
        Err(e) => {
            log::error!("Post create failed: {e}");
            render(AdminNewTemplate {
                error: "Create failed, changes were not saved".to_string(),
            })
        }
    }
}

#[get("/admin/edit/{id}")]
pub async fn admin_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let id = path.into_inner();

    // Fetched through the admin listing so drafts and hidden posts are
    // editable too.
    let posts = match state.api.admin_posts(&session).await {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Admin post list failed: {e}");
            return HttpResponse::InternalServerError().body("Post could not be loaded");
        }
    };

    match posts.into_iter().find(|p| p.id == id) {
        Some(post) => render(AdminEditTemplate {
            post,
            error: String::new(),
        }),
        None => HttpResponse::NotFound().body("Not found"),
    }
}

#[post("/admin/edit/{id}")]
pub async fn admin_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<AdminPostForm>,
) -> impl Responder {
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let id = path.into_inner();

    let update = PostUpdate {
        title: Some(form.title.trim().to_string()),
        content: Some(form.content.clone()),
        tags: Some(form.split_tags()),
        image: form.image_or_none(),
        kind: Some(form.kind.trim().to_string()),
        visibility: Some(form.visibility.trim().to_string()),
    };

    match state.api.update_post(&session, id, &update).await {
        Ok(_) => see_other(&req, &format!("/admin/edit/{id}")),
        Err(e) => {
            log::error!("Post update failed for {id}: {e}");
            HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body("Update failed, changes were not saved")
        }
    }
}

#[post("/admin/delete/{id}")]
pub async fn admin_delete(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> impl Responder {
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let id = path.into_inner();

    match state.api.delete_post(&session, id).await {
        Ok(()) => see_other(&req, "/admin"),
        Err(e) => {
            log::error!("Post delete failed for {id}: {e}");
            HttpResponse::BadRequest().body("Delete failed")
        }
    }
}

/// Image upload for the editor. The file is read into memory and forwarded
/// to the backend's upload endpoint; the stored URL comes back as JSON for
/// the editor to insert.
#[post("/admin/upload")]
pub async fn admin_upload(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> impl Responder {
    let session = match require_admin(state.get_ref(), &req).await {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let mut upload: Option<(String, String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => return HttpResponse::BadRequest().body(format!("Malformed upload: {e}")),
        };

        if field.name() != "image" {
            continue;
        }

        let file_name = field
            .content_disposition()
            .get_filename()
            .unwrap_or("upload")
            .to_string();
        let content_type = field
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(data) => bytes.extend_from_slice(&data),
                Err(e) => {
                    return HttpResponse::BadRequest().body(format!("Malformed upload: {e}"))
                }
            }
        }

        upload = Some((file_name, content_type, bytes));
        break;
    }

    let Some((file_name, content_type, bytes)) = upload else {
        return HttpResponse::BadRequest().body("Missing image field");
    };

    match state
        .api
        .upload_image(&session, file_name, &content_type, bytes)
        .await
    {
        Ok(image) => HttpResponse::Ok().json(image),
        Err(e) => {
            log::error!("Image upload failed: {e}");
            HttpResponse::BadRequest().body("Upload failed")
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(admin_dashboard)
        .service(admin_new)
        .service(admin_create)
        .service(admin_edit)
        .service(admin_update)
        .service(admin_delete)
        .service(admin_upload);
}
