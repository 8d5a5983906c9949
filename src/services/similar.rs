//! "You might also like" ranking for the post detail page.

use std::collections::HashSet;

use crate::models::Post;

/// Minimum shared tags before a post is worth suggesting.
const MIN_SHARED_TAGS: usize = 2;

/// A candidate post together with how many tags it shares with the one
/// being viewed.
#[derive(Debug, Clone)]
pub struct RankedPost {
    pub post: Post,
    pub shared: usize,
}

/// Rank `all` against `current` by shared-tag count.
///
/// Posts sharing fewer than two tags are dropped, as is the current post
/// itself. The result is sorted descending by shared count; ties keep the
/// incoming order (the sort is stable). Duplicate tags on a post count
/// once.
pub fn similar_posts(current: &Post, all: &[Post]) -> Vec<RankedPost> {
    let own: HashSet<&str> = current.tags.iter().map(String::as_str).collect();

    let mut ranked: Vec<RankedPost> = all
        .iter()
        .filter(|p| p.id != current.id)
        .filter_map(|p| {
            let shared = p
                .tags
                .iter()
                .map(String::as_str)
                .collect::<HashSet<_>>()
                .intersection(&own)
                .count();
            (shared >= MIN_SHARED_TAGS).then(|| RankedPost {
                post: p.clone(),
                shared,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.shared.cmp(&a.shared));
    ranked
}
