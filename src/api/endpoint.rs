//! Backend endpoint table
//!
//! - `GET blogs` - list posts
//! - `GET blogs/{id}` - fetch one post
//! - `POST blogs` - create (multipart)
//! - `POST blogs/{id}` + `_method=PUT` - update (multipart)
//! - `DELETE blogs/{id}` - delete

use crate::model::PostId;

/// HTTP verb of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One backend operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListPosts,
    GetPost(PostId),
    CreatePost,
    UpdatePost(PostId),
    DeletePost(PostId),
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListPosts | Endpoint::GetPost(_) => Method::Get,
            // Updates go over POST with a method-override field, since
            // multipart bodies are only accepted on POST.
            Endpoint::CreatePost | Endpoint::UpdatePost(_) => Method::Post,
            Endpoint::DeletePost(_) => Method::Delete,
        }
    }

    /// Path relative to the API base
    pub fn path(&self) -> String {
        match self {
            Endpoint::ListPosts | Endpoint::CreatePost => "blogs".to_string(),
            Endpoint::GetPost(id) | Endpoint::UpdatePost(id) | Endpoint::DeletePost(id) => {
                format!("blogs/{}", urlencoding::encode(id.as_str()))
            }
        }
    }

    /// Absolute URL against the configured base
    pub fn url(&self, base_url: &str) -> String {
        join_url(base_url, &self.path())
    }
}

/// Join a base URL and a path with exactly one `/` between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
