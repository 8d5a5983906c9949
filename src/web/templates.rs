use askama::Template;

use inkpost::models::{Comment, Post};
use inkpost::services::search::SearchGroups;
use inkpost::services::similar::RankedPost;

#[derive(Template)]
#[template(path = "public/index.html")]
pub struct PublicIndexTemplate {
    pub posts: Vec<Post>,
    pub error: String,
}

#[derive(Template)]
#[template(path = "public/post.html")]
pub struct PublicPostTemplate {
    pub post: Post,
    pub stars: String,
    pub similar: Vec<RankedPost>,
    pub comments: Vec<Comment>,
    pub liked: bool,
    pub is_admin: bool,
}

#[derive(Template)]
#[template(path = "public/tag.html")]
pub struct PublicTagTemplate {
    pub tag: String,
    pub title: String,
    pub accent: &'static str,
    pub posts: Vec<Post>,
    pub error: String,
}

#[derive(Template)]
#[template(path = "public/search.html")]
pub struct SearchTemplate {
    pub query: String,
    pub groups: SearchGroups,
    pub error: String,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub posts: Vec<Post>,
    pub error: String,
}

#[derive(Template)]
#[template(path = "admin/new.html")]
pub struct AdminNewTemplate {
    pub error: String,
}

#[derive(Template)]
#[template(path = "admin/edit.html")]
pub struct AdminEditTemplate {
    pub post: Post,
    pub error: String,
}
