mod common;

#[cfg(test)]
pub mod similar_tests {
    use super::common::*;

    use inkpost::services::similar::similar_posts;

    #[test]
    fn test_similar_posts_requires_two_shared_tags() {
        let current = make_post(0, "Current", &["rust", "wasm", "games"]);
        let one_shared = make_post(1, "One", &["rust", "cooking"]);
        let two_shared = make_post(2, "Two", &["rust", "wasm"]);

        let ranked = similar_posts(&current, &[one_shared, two_shared]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].post.id, post_id(2));
        assert_eq!(ranked[0].shared, 2);
    }

    #[test]
    fn test_similar_posts_sorts_by_shared_count_descending() {
        let current = make_post(0, "Current", &["a", "b", "c", "d"]);
        let two_shared = make_post(1, "Two", &["a", "b"]);
        let three_shared = make_post(2, "Three", &["a", "b", "c"]);

        let ranked = similar_posts(&current, &[two_shared, three_shared]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].post.id, post_id(2));
        assert_eq!(ranked[0].shared, 3);
        assert_eq!(ranked[1].post.id, post_id(1));
        assert_eq!(ranked[1].shared, 2);
    }

    #[test]
    fn test_similar_posts_ties_keep_input_order() {
        let current = make_post(0, "Current", &["a", "b", "c"]);
        let first = make_post(1, "First", &["a", "b"]);
        let second = make_post(2, "Second", &["b", "c"]);

        let ranked = similar_posts(&current, &[first, second]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].post.id, post_id(1));
        assert_eq!(ranked[1].post.id, post_id(2));
    }

    #[test]
    fn test_similar_posts_excludes_current_post() {
        let current = make_post(0, "Current", &["a", "b"]);
        let same_again = make_post(0, "Current", &["a", "b"]);
        let other = make_post(1, "Other", &["a", "b"]);

        let ranked = similar_posts(&current, &[same_again, other]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].post.id, post_id(1));
    }

    #[test]
    fn test_similar_posts_counts_duplicate_tags_once() {
        let current = make_post(0, "Current", &["a", "b", "c"]);
        let duplicated = make_post(1, "Dup", &["a", "a", "a"]);

        let ranked = similar_posts(&current, &[duplicated]);

        // Only one distinct shared tag, below the threshold.
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_similar_posts_empty_when_no_candidates() {
        let current = make_post(0, "Current", &["a", "b"]);

        let ranked = similar_posts(&current, &[]);

        assert!(ranked.is_empty());
    }
}
