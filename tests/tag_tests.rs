#[cfg(test)]
pub mod tag_tests {
    use inkpost::services::tags::{quality_rating, quality_stars, stars};

    #[test]
    fn test_quality_rating_parses_q0_through_q5() {
        for n in 0..=5u8 {
            let tag = format!("q{n}");
            assert_eq!(quality_rating(&[tag]), Some(n));
        }
    }

    #[test]
    fn test_quality_rating_rejects_out_of_range() {
        assert_eq!(quality_rating(&["q6"]), None);
        assert_eq!(quality_rating(&["q12"]), None);
    }

    #[test]
    fn test_quality_rating_rejects_non_quality_tags() {
        assert_eq!(quality_rating(&["quality"]), None);
        assert_eq!(quality_rating(&["q"]), None);
        assert_eq!(quality_rating(&["rust", "blog"]), None);
    }

    #[test]
    fn test_quality_rating_first_quality_tag_wins() {
        assert_eq!(quality_rating(&["rust", "q4", "q1"]), Some(4));
    }

    #[test]
    fn test_stars_renders_fixed_width_strip() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }

    #[test]
    fn test_quality_stars_empty_without_quality_tag() {
        assert_eq!(quality_stars(&["rust", "blog"]), "");
        assert_eq!(quality_stars(&["q2", "blog"]), "★★☆☆☆");
    }
}
