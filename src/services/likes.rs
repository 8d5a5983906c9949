//! Per-browser "already liked" flag.
//!
//! The SPA this replaces kept the flag in local storage; server-side it
//! lives in a `liked` cookie holding comma-separated post ids. The backend
//! counter is authoritative; the cookie only keeps one browser from liking
//! the same post twice.

use uuid::Uuid;

pub const LIKED_COOKIE: &str = "liked";

pub fn is_liked(cookie: Option<&str>, id: Uuid) -> bool {
    let Some(raw) = cookie else {
        return false;
    };
    raw.split(',')
        .filter_map(|s| Uuid::parse_str(s.trim()).ok())
        .any(|liked| liked == id)
}

/// Cookie value with `id` appended. Unparseable entries are dropped;
/// appending an already-present id leaves the value unchanged.
pub fn with_liked(cookie: Option<&str>, id: Uuid) -> String {
    let mut ids: Vec<Uuid> = cookie
        .unwrap_or_default()
        .split(',')
        .filter_map(|s| Uuid::parse_str(s.trim()).ok())
        .collect();

    if !ids.contains(&id) {
        ids.push(id);
    }

    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
