mod common;

#[cfg(test)]
pub mod search_tests {
    use super::common::*;

    use inkpost::services::search::categorize;

    #[test]
    fn test_categorize_partitions_into_declared_groups() {
        let posts = vec![
            make_post_with_content(1, "Rust diary", "<p>More rust notes.</p>", &["blog"]),
            make_post_with_content(2, "Rust diary", "<p>Nothing relevant.</p>", &["blog"]),
            make_post_with_content(3, "Travel log", "<p>A rust-colored sunset.</p>", &["blog"]),
            make_post_with_content(4, "Travel log", "<p>Nothing relevant.</p>", &["rust"]),
            make_post_with_content(5, "Travel log", "<p>Nothing relevant.</p>", &["blog"]),
        ];

        let groups = categorize("rust", posts);

        assert_eq!(groups.full_match.len(), 1);
        assert_eq!(groups.full_match[0].id, post_id(1));
        assert_eq!(groups.title_only.len(), 1);
        assert_eq!(groups.title_only[0].id, post_id(2));
        assert_eq!(groups.content_only.len(), 1);
        assert_eq!(groups.content_only[0].id, post_id(3));
        assert_eq!(groups.tag_only.len(), 1);
        assert_eq!(groups.tag_only[0].id, post_id(4));
        assert_eq!(groups.other.len(), 1);
        assert_eq!(groups.other[0].id, post_id(5));
    }

    #[test]
    fn test_categorize_first_matching_group_wins() {
        // Matches title, content and tags; only full_match may claim it.
        let post =
            make_post_with_content(1, "Rust diary", "<p>All the rust.</p>", &["rust"]);

        let groups = categorize("rust", vec![post]);

        assert_eq!(groups.full_match.len(), 1);
        assert!(groups.title_only.is_empty());
        assert!(groups.content_only.is_empty());
        assert!(groups.tag_only.is_empty());
        assert!(groups.other.is_empty());
    }

    #[test]
    fn test_categorize_caps_each_group_at_three() {
        let posts: Vec<_> = (1..=5u8)
            .map(|n| {
                make_post_with_content(n, "Rust diary", "<p>More rust notes.</p>", &["blog"])
            })
            .collect();

        let groups = categorize("rust", posts);

        assert_eq!(groups.full_match.len(), 3);
        assert_eq!(groups.full_match[0].id, post_id(1));
        assert_eq!(groups.full_match[2].id, post_id(3));
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        let post = make_post_with_content(1, "RUST Diary", "<p>rUsT notes.</p>", &[]);

        let groups = categorize("Rust", vec![post]);

        assert_eq!(groups.full_match.len(), 1);
    }

    #[test]
    fn test_categorize_empty_results_yield_empty_groups() {
        let groups = categorize("rust", vec![]);
        assert!(groups.is_empty());
    }

    // The suggestion dropdown consumes this as JSON; the group names are
    // part of the wire contract.
    #[test]
    fn test_groups_serialize_under_declared_names() {
        let posts =
            vec![make_post_with_content(1, "Rust diary", "<p>All the rust.</p>", &["rust"])];
        let value = serde_json::to_value(categorize("rust", posts)).unwrap();

        for key in ["full_match", "title_only", "content_only", "tag_only", "other"] {
            assert!(value.get(key).is_some(), "missing group {key}");
        }
        assert_eq!(value["full_match"][0]["title"], "Rust diary");
    }
}
