use chrono::{DateTime, Utc};
use uuid::Uuid;

use inkpost::models::Post;

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn post_id(n: u8) -> Uuid {
    Uuid::from_u128(n as u128)
}

pub fn make_post(n: u8, title: &str, tags: &[&str]) -> Post {
    Post {
        id: post_id(n),
        title: title.to_string(),
        content: format!("<p>{title} body text.</p>"),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        image: None,
        date: parse_time("2026-03-01T12:00:00Z"),
        kind: "blog".to_string(),
        visibility: "public".to_string(),
        likes: 0,
        views: 0,
        comments: 0,
    }
}

pub fn make_post_with_content(n: u8, title: &str, content: &str, tags: &[&str]) -> Post {
    Post {
        content: content.to_string(),
        ..make_post(n, title, tags)
    }
}
