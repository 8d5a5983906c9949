mod common;

#[cfg(test)]
pub mod likes_tests {
    use super::common::*;

    use inkpost::services::likes::{is_liked, with_liked};

    #[test]
    fn test_is_liked_false_without_cookie() {
        assert!(!is_liked(None, post_id(1)));
    }

    #[test]
    fn test_is_liked_finds_id_in_cookie() {
        let value = format!("{},{}", post_id(1), post_id(2));
        assert!(is_liked(Some(value.as_str()), post_id(2)));
        assert!(!is_liked(Some(value.as_str()), post_id(3)));
    }

    #[test]
    fn test_is_liked_ignores_garbage_entries() {
        let value = format!("not-a-uuid,,{}", post_id(7));
        assert!(is_liked(Some(value.as_str()), post_id(7)));
    }

    #[test]
    fn test_with_liked_appends_new_id() {
        let value = post_id(1).to_string();
        let updated = with_liked(Some(value.as_str()), post_id(2));
        assert_eq!(updated, format!("{},{}", post_id(1), post_id(2)));
    }

    #[test]
    fn test_with_liked_starts_fresh_without_cookie() {
        assert_eq!(with_liked(None, post_id(1)), post_id(1).to_string());
    }

    #[test]
    fn test_with_liked_is_idempotent() {
        let value = format!("{},{}", post_id(1), post_id(2));
        let updated = with_liked(Some(value.as_str()), post_id(1));
        assert_eq!(updated, value);
    }

    #[test]
    fn test_with_liked_drops_garbage_entries() {
        let value = format!("junk,{}", post_id(1));
        let updated = with_liked(Some(value.as_str()), post_id(2));
        assert_eq!(updated, format!("{},{}", post_id(1), post_id(2)));
    }
}
