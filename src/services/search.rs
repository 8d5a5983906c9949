//! Display grouping for backend full-text search results.
//!
//! The backend does the actual matching; this only buckets its results into
//! the five suggestion categories the search bar shows. First matching
//! bucket wins, so a post appears in exactly one group.

use serde::Serialize;

use crate::models::Post;

/// Per-category cap. The dropdown shows at most three entries per group.
const GROUP_CAP: usize = 3;

#[derive(Debug, Default, Serialize)]
pub struct SearchGroups {
    /// Query present in both title and content.
    pub full_match: Vec<Post>,
    pub title_only: Vec<Post>,
    pub content_only: Vec<Post>,
    pub tag_only: Vec<Post>,
    pub other: Vec<Post>,
}

impl SearchGroups {
    pub fn is_empty(&self) -> bool {
        self.full_match.is_empty()
            && self.title_only.is_empty()
            && self.content_only.is_empty()
            && self.tag_only.is_empty()
            && self.other.is_empty()
    }
}

/// Bucket `results` for the query, case-insensitive, capped at three per
/// group. Category order is the only ranking.
pub fn categorize(query: &str, results: Vec<Post>) -> SearchGroups {
    let needle = query.to_lowercase();
    let mut groups = SearchGroups::default();

    for post in results {
        let in_title = post.title.to_lowercase().contains(&needle);
        let in_content = post.content.to_lowercase().contains(&needle);
        let in_tags = post
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&needle));

        let bucket = if in_title && in_content {
            &mut groups.full_match
        } else if in_title {
            &mut groups.title_only
        } else if in_content {
            &mut groups.content_only
        } else if in_tags {
            &mut groups.tag_only
        } else {
            &mut groups.other
        };

        if bucket.len() < GROUP_CAP {
            bucket.push(post);
        }
    }

    groups
}
