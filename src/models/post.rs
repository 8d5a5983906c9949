use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A content record owned and served by the backend.
///
/// `content` is an HTML string authored in the admin editor and rendered
/// as-is. `comments` is the backend's comment counter; comment bodies live
/// behind a separate endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    pub visibility: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub comments: i64,
}

impl Post {
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or("")
    }

    pub fn is_public(&self) -> bool {
        self.visibility == "public"
    }

    pub fn date_display(&self) -> String {
        self.date.format("%b %e, %Y").to_string()
    }

    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }

    /// Plain-text teaser for listing cards: tags stripped, truncated on a
    /// char boundary.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut out = String::with_capacity(self.content.len().min(max_chars + 1));
        let mut in_tag = false;
        for c in self.content.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                c if !in_tag => out.push(c),
                _ => {}
            }
        }
        let trimmed: String = out.split_whitespace().collect::<Vec<_>>().join(" ");
        if trimmed.chars().count() <= max_chars {
            return trimmed;
        }
        let cut: String = trimmed.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub visibility: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub visibility: Option<String>,
}
