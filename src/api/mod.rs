//! Client for the external REST API that owns all blog data.
//!
//! Every fetch in the application goes through [`BackendClient`]. The
//! contract is plain: JSON in, JSON out (multipart for image upload),
//! non-2xx is a generic failure. Authenticated calls forward the browser's
//! session cookie verbatim; this service never mints credentials itself.

use reqwest::header;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::ApiError;
use crate::models::{AuthStatus, Comment, CommentCreate, Post, PostCreate, PostUpdate};

/// Backend response for a stored image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_session(builder: RequestBuilder, session: &str) -> RequestBuilder {
        builder.header(header::COOKIE, session)
    }

    async fn expect_ok(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(status))
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.http.get(self.url("/posts/")).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, ApiError> {
        let response = self.http.get(self.url(&format!("/posts/{id}"))).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn posts_by_tag(&self, tag: &str) -> Result<Vec<Post>, ApiError> {
        // Tags are free text; keep `/`, `?` and friends out of the path.
        let tag = urlencoding::encode(tag);
        let response = self
            .http
            .get(self.url(&format!("/posts/tag/{tag}")))
            .send()
            .await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn search_posts(&self, query: &str) -> Result<Vec<Post>, ApiError> {
        let response = self
            .http
            .get(self.url("/posts/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    /// Full post list including drafts and hidden posts. Admin only; the
    /// backend decides based on the forwarded session.
    pub async fn admin_posts(&self, session: &str) -> Result<Vec<Post>, ApiError> {
        let request = self.http.get(self.url("/posts/admin"));
        let response = Self::with_session(request, session).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn create_post(&self, session: &str, data: &PostCreate) -> Result<Post, ApiError> {
        let request = self.http.post(self.url("/posts/")).json(data);
        let response = Self::with_session(request, session).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn update_post(
        &self,
        session: &str,
        id: Uuid,
        data: &PostUpdate,
    ) -> Result<Post, ApiError> {
        let request = self.http.put(self.url(&format!("/posts/{id}"))).json(data);
        let response = Self::with_session(request, session).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn delete_post(&self, session: &str, id: Uuid) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("/posts/{id}")));
        let response = Self::with_session(request, session).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    /// Increment the like counter. The "already liked" guard lives in the
    /// browser cookie, not here.
    pub async fn like_post(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/posts/{id}/like")))
            .send()
            .await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    pub async fn comments_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/comments/post/{post_id}")))
            .send()
            .await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn create_comment(
        &self,
        post_id: Uuid,
        data: &CommentCreate,
    ) -> Result<Comment, ApiError> {
        let response = self
            .http
            .post(self.url(&format!("/comments/post/{post_id}")))
            .json(data)
            .send()
            .await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }

    pub async fn delete_comment(&self, session: &str, id: Uuid) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("/comments/{id}")));
        let response = Self::with_session(request, session).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    pub async fn ban_comment(&self, session: &str, id: Uuid) -> Result<(), ApiError> {
        let request = self.http.post(self.url(&format!("/comments/{id}/ban")));
        let response = Self::with_session(request, session).send().await?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    /// Session check. Any failure (no session, network, non-2xx) reads as
    /// "not admin" rather than an error page.
    pub async fn auth_me(&self, session: Option<&str>) -> AuthStatus {
        let Some(session) = session else {
            return AuthStatus::default();
        };

        let request = self.http.get(self.url("/auth/me"));
        let response = match Self::with_session(request, session).send().await {
            Ok(r) => r,
            Err(_) => return AuthStatus::default(),
        };
        if !response.status().is_success() {
            return AuthStatus::default();
        }
        response.json().await.unwrap_or_default()
    }

    pub async fn upload_image(
        &self,
        session: &str,
        file_name: String,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let request = self.http.post(self.url("/upload/image")).multipart(form);
        let response = Self::with_session(request, session).send().await?;
        Ok(Self::expect_ok(response).await?.json().await?)
    }
}
