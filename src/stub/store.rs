//! In-memory post store

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::model::content_type_for;

/// Public path prefix of stored cover images
pub const COVER_IMAGE_PREFIX: &str = "/storage/cover_images/";

/// A cover image received in a multipart body
#[derive(Debug, Clone)]
pub struct NewImage {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StoredImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
struct StoredPost {
    id: u64,
    title: String,
    message: String,
    cover_key: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// A post as the stub serializes it: numeric id, server-relative cover path
#[derive(Debug, Clone, Serialize)]
pub struct PostResource {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub cover_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&StoredPost> for PostResource {
    fn from(post: &StoredPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            message: post.message.clone(),
            cover_image: post
                .cover_key
                .as_ref()
                .map(|key| format!("{}{}", COVER_IMAGE_PREFIX, key)),
            created_at: post.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            updated_at: post.updated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    posts: Vec<StoredPost>,
    images: HashMap<String, StoredImage>,
}

impl StoreInner {
    fn put_image(&mut self, image: NewImage) -> String {
        let extension = image
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_else(|| "bin".to_string());
        let key = format!("{}.{}", uuid::Uuid::new_v4().simple(), extension);

        let content_type = image
            .content_type
            .unwrap_or_else(|| content_type_for(&key).to_string());
        self.images.insert(
            key.clone(),
            StoredImage {
                content_type,
                bytes: image.bytes,
            },
        );
        key
    }
}

/// Posts and their cover images
#[derive(Default)]
pub struct PostStore {
    inner: RwLock<StoreInner>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All posts, newest first
    pub async fn list(&self) -> Vec<PostResource> {
        let inner = self.inner.read().await;
        inner.posts.iter().rev().map(PostResource::from).collect()
    }

    pub async fn get(&self, id: u64) -> Option<PostResource> {
        let inner = self.inner.read().await;
        inner
            .posts
            .iter()
            .find(|post| post.id == id)
            .map(PostResource::from)
    }

    pub async fn create(&self, title: String, message: String, image: Option<NewImage>) -> u64 {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        let cover_key = image.map(|image| inner.put_image(image));
        let now = Utc::now();

        inner.posts.push(StoredPost {
            id,
            title,
            message,
            cover_key,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Update text fields; the cover is replaced only when a new image is given.
    /// Returns false for unknown ids.
    pub async fn update(
        &self,
        id: u64,
        title: String,
        message: String,
        image: Option<NewImage>,
    ) -> bool {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.posts.iter().position(|post| post.id == id) else {
            return false;
        };

        if let Some(image) = image {
            let key = inner.put_image(image);
            if let Some(old) = inner.posts[index].cover_key.replace(key) {
                inner.images.remove(&old);
            }
        }

        let post = &mut inner.posts[index];
        post.title = title;
        post.message = message;
        post.updated_at = Utc::now();
        true
    }

    pub async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.posts.iter().position(|post| post.id == id) else {
            return false;
        };

        let removed = inner.posts.remove(index);
        if let Some(key) = removed.cover_key {
            inner.images.remove(&key);
        }
        true
    }

    pub async fn image(&self, key: &str) -> Option<StoredImage> {
        self.inner.read().await.images.get(key).cloned()
    }

    pub async fn image_count(&self) -> usize {
        self.inner.read().await.images.len()
    }
}
