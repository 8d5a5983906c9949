use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use inkpost::services::likes::LIKED_COOKIE;

use crate::web::state::AppState;

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// The browser's raw `Cookie` header, forwarded verbatim to the backend so
/// its session check sees exactly what the browser sent.
pub fn forwarded_cookies(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn liked_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(LIKED_COOKIE).map(|c| c.value().to_string())
}

/// Admin gate for the editor routes. Resolves the forwarded session against
/// the backend; anyone the backend does not vouch for lands back on the
/// public index. The backend re-checks on every mutating call, so this only
/// decides which UI is shown.
pub async fn require_admin(state: &AppState, req: &HttpRequest) -> Result<String, HttpResponse> {
    let session = forwarded_cookies(req);
    let auth = state.api.auth_me(session.as_deref()).await;

    if auth.admin {
        // admin implies a session header was present
        Ok(session.unwrap_or_default())
    } else if is_htmx(req) {
        Err(HttpResponse::Unauthorized()
            .insert_header(("HX-Redirect", "/"))
            .finish())
    } else {
        Err(HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish())
    }
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Redirect helper shared by the POST handlers: htmx clients get an
/// `HX-Redirect`, plain form posts a 303.
pub fn see_other(req: &HttpRequest, location: &str) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", location.to_string()))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", location.to_string()))
            .finish()
    }
}
