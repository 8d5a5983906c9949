use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub banned: bool,
}

impl Comment {
    pub fn date_display(&self) -> String {
        self.date.format("%b %e, %Y %H:%M").to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentCreate {
    pub author: String,
    pub content: String,
}
