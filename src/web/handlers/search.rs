use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use uuid::Uuid;

use inkpost::models::Post;
use inkpost::services::search::{categorize, SearchGroups};

use crate::web::forms::SearchQuery;
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::SearchTemplate;

#[get("/search")]
pub async fn search_page(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let q = query.q.as_deref().unwrap_or_default().trim().to_string();
    if q.is_empty() {
        return render(SearchTemplate {
            query: q,
            groups: SearchGroups::default(),
            error: String::new(),
        });
    }

    match state.api.search_posts(&q).await {
        Ok(results) => {
            let groups = categorize(&q, results);
            render(SearchTemplate {
                query: q,
                groups,
                error: String::new(),
            })
        }
        Err(e) => {
            log::error!("Search failed for {q:?}: {e}");
            render(SearchTemplate {
                query: q,
                groups: SearchGroups::default(),
                error: "Search is unavailable right now.".to_string(),
            })
        }
    }
}

/// One dropdown entry; the suggestion list never needs post bodies.
#[derive(Serialize)]
struct SuggestEntry {
    id: Uuid,
    title: String,
}

#[derive(Default, Serialize)]
struct SuggestResponse {
    full_match: Vec<SuggestEntry>,
    title_only: Vec<SuggestEntry>,
    content_only: Vec<SuggestEntry>,
    tag_only: Vec<SuggestEntry>,
    other: Vec<SuggestEntry>,
}

fn entries(posts: &[Post]) -> Vec<SuggestEntry> {
    posts
        .iter()
        .map(|p| SuggestEntry {
            id: p.id,
            title: p.title.clone(),
        })
        .collect()
}

impl From<SearchGroups> for SuggestResponse {
    fn from(groups: SearchGroups) -> Self {
        Self {
            full_match: entries(&groups.full_match),
            title_only: entries(&groups.title_only),
            content_only: entries(&groups.content_only),
            tag_only: entries(&groups.tag_only),
            other: entries(&groups.other),
        }
    }
}

/// JSON feed for the header search bar. Errors read as "no suggestions";
/// the dropdown simply stays empty.
#[get("/search/suggest")]
pub async fn search_suggest(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let q = query.q.as_deref().unwrap_or_default().trim().to_string();
    if q.is_empty() {
        return HttpResponse::Ok().json(SuggestResponse::default());
    }

    match state.api.search_posts(&q).await {
        Ok(results) => {
            let response = SuggestResponse::from(categorize(&q, results));
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("Suggestion search failed for {q:?}: {e}");
            HttpResponse::Ok().json(SuggestResponse::default())
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_page).service(search_suggest);
}
