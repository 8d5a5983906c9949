use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct CommentForm {
    pub author: String,
    pub content: String,
}

/// Delete/ban act on a comment id but redirect back to the post page, so
/// the post id rides along in the form.
#[derive(Deserialize)]
pub struct CommentModerationForm {
    pub post_id: Uuid,
}

#[derive(Deserialize)]
pub struct AdminPostForm {
    pub title: String,
    pub content: String,
    /// Comma-separated in the form, split before hitting the API.
    pub tags: String,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub visibility: String,
}

impl AdminPostForm {
    pub fn split_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn image_or_none(&self) -> Option<String> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(tags: &str, image: Option<&str>) -> AdminPostForm {
        AdminPostForm {
            title: "A title".to_string(),
            content: "<p>Body</p>".to_string(),
            tags: tags.to_string(),
            image: image.map(str::to_string),
            kind: "blog".to_string(),
            visibility: "public".to_string(),
        }
    }

    #[test]
    fn test_split_tags_trims_and_drops_empty_segments() {
        assert_eq!(form(" rust , , web ,", None).split_tags(), vec!["rust", "web"]);
    }

    #[test]
    fn test_split_tags_blank_input_yields_no_tags() {
        assert!(form("", None).split_tags().is_empty());
        assert!(form(" , ,, ", None).split_tags().is_empty());
    }

    #[test]
    fn test_image_or_none_blank_values_read_as_none() {
        assert_eq!(form("", None).image_or_none(), None);
        assert_eq!(form("", Some("")).image_or_none(), None);
        assert_eq!(form("", Some("   ")).image_or_none(), None);
    }

    #[test]
    fn test_image_or_none_trims_the_url() {
        assert_eq!(
            form("", Some(" /uploads/cover.png ")).image_or_none(),
            Some("/uploads/cover.png".to_string())
        );
    }
}
