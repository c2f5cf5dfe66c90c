//! Native HTTP client
//!
//! `reqwest` implementation of [`BlogApi`].

use async_trait::async_trait;
use reqwest::{
    header::ACCEPT,
    multipart::{Form, Part},
    Client, Response,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use std::time::Duration;

use super::{decode_envelope, ApiError, ApiResult, BlogApi, Endpoint, Method, PostSubmission};
use crate::config::ApiConfig;
use crate::model::{Envelope, ImageUpload, Post, PostId};

/// HTTP client for the blog backend
#[derive(Debug, Clone)]
pub struct HttpBlogClient {
    client: Client,
    base_url: String,
}

impl HttpBlogClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    async fn send(&self, endpoint: &Endpoint, form: Option<Form>) -> ApiResult<Response> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(method = endpoint.method().as_str(), %url, "Sending request");

        let request = match endpoint.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        }
        .header(ACCEPT, "application/json");

        let request = match form {
            Some(form) => request.multipart(form),
            None => request,
        };

        request.send().await.map_err(transport_error)
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<Envelope<T>> {
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        decode_envelope(status, &body)
    }

    fn build_form(submission: PostSubmission<ImageUpload>) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in submission.text_fields() {
            form = form.text(name, value.to_string());
        }

        if let Some(image) = submission.cover_image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| ApiError::Transport(format!("Invalid image type: {}", e)))?;
            form = form.part("cover_image", part);
        }

        Ok(form)
    }
}

#[async_trait(?Send)]
impl BlogApi for HttpBlogClient {
    type Upload = ImageUpload;

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let response = self.send(&Endpoint::ListPosts, None).await?;
        Self::read_envelope::<Vec<Post>>(response).await?.into_data()
    }

    async fn get_post(&self, id: &PostId) -> ApiResult<Post> {
        let response = self.send(&Endpoint::GetPost(id.clone()), None).await?;
        Self::read_envelope::<Post>(response).await?.into_data()
    }

    async fn save_post(&self, submission: PostSubmission<ImageUpload>) -> ApiResult<Option<String>> {
        let endpoint = submission.endpoint();
        let form = Self::build_form(submission)?;
        let response = self.send(&endpoint, Some(form)).await?;
        Self::read_envelope::<IgnoredAny>(response)
            .await?
            .into_message()
    }

    async fn delete_post(&self, id: &PostId) -> ApiResult<Option<String>> {
        let response = self.send(&Endpoint::DeletePost(id.clone()), None).await?;
        Self::read_envelope::<IgnoredAny>(response)
            .await?
            .into_message()
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    let reason = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Backend unavailable".to_string()
    } else {
        e.to_string()
    };
    tracing::warn!(error = %e, "Blog backend request failed");
    ApiError::Transport(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::{self, StubState};
    use std::sync::Arc;

    /// Serve a fresh stub backend on an ephemeral port.
    async fn spawn_stub() -> HttpBlogClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = stub::build_router(Arc::new(StubState::new()));
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        HttpBlogClient::new(format!("http://{}/api/", addr), Duration::from_secs(5)).unwrap()
    }

    fn submission(
        target: Option<PostId>,
        title: &str,
        message: &str,
        cover_image: Option<ImageUpload>,
    ) -> PostSubmission<ImageUpload> {
        PostSubmission {
            target,
            title: title.to_string(),
            message: message.to_string(),
            cover_image,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let client = spawn_stub().await;

        let message = client
            .save_post(submission(None, "T", "M", None))
            .await
            .unwrap();
        assert_eq!(message.as_deref(), Some("Blog created successfully"));

        let posts = client.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "T");
        assert_eq!(posts[0].message, "M");
        assert!(posts[0].cover_image.is_none());
        assert!(posts[0].created_at.is_some());
    }

    #[tokio::test]
    async fn test_edit_preserves_or_replaces_image() {
        let client = spawn_stub().await;

        client
            .save_post(submission(
                None,
                "With image",
                "Body",
                Some(ImageUpload::new("first.png", vec![1, 2, 3])),
            ))
            .await
            .unwrap();
        let post = client.list_posts().await.unwrap().remove(0);
        let original_image = post.cover_image.clone().unwrap();
        assert!(original_image.starts_with("/storage/cover_images/"));

        client
            .save_post(submission(Some(post.id.clone()), "Renamed", "Body", None))
            .await
            .unwrap();
        let edited = client.get_post(&post.id).await.unwrap();
        assert_eq!(edited.title, "Renamed");
        assert_eq!(edited.cover_image.as_deref(), Some(original_image.as_str()));

        client
            .save_post(submission(
                Some(post.id.clone()),
                "Renamed",
                "Body",
                Some(ImageUpload::new("second.jpg", vec![4, 5, 6])),
            ))
            .await
            .unwrap();
        let replaced = client.get_post(&post.id).await.unwrap();
        let new_image = replaced.cover_image.unwrap();
        assert_ne!(new_image, original_image);
        assert!(new_image.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn test_delete_removes_from_next_list() {
        let client = spawn_stub().await;
        client.save_post(submission(None, "A", "1", None)).await.unwrap();
        client.save_post(submission(None, "B", "2", None)).await.unwrap();

        let posts = client.list_posts().await.unwrap();
        let doomed = posts.iter().find(|p| p.title == "A").unwrap().id.clone();

        let message = client.delete_post(&doomed).await.unwrap();
        assert_eq!(message.as_deref(), Some("Blog deleted successfully"));

        let remaining = client.list_posts().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "B");
    }

    #[tokio::test]
    async fn test_rejections_carry_server_message() {
        let client = spawn_stub().await;

        let err = client
            .save_post(submission(None, "  ", "M", None))
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("The title field is required."));

        let err = client.get_post(&PostId::new("999")).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Blog not found"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            HttpBlogClient::new(format!("http://{}/api", addr), Duration::from_secs(2)).unwrap();
        let err = client.list_posts().await.unwrap_err();
        assert!(err.is_transport());
    }
}
