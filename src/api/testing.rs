//! Scripted in-memory backend for view and driver tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

use super::{ApiError, ApiResult, BlogApi, PostSubmission};
use crate::model::{ImageUpload, Post, PostId};

pub const BASE_URL: &str = "http://backend.test/api/";

/// A call the fake received
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Get(PostId),
    Save(PostSubmission<ImageUpload>),
    Delete(PostId),
}

/// Backend double that records calls and replays queued responses
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    lists: RefCell<VecDeque<ApiResult<Vec<Post>>>>,
    gets: RefCell<VecDeque<ApiResult<Post>>>,
    writes: RefCell<VecDeque<ApiResult<Option<String>>>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_list(self, result: ApiResult<Vec<Post>>) -> Self {
        self.lists.borrow_mut().push_back(result);
        self
    }

    pub fn on_get(self, result: ApiResult<Post>) -> Self {
        self.gets.borrow_mut().push_back(result);
        self
    }

    /// Queue a response for the next save or delete
    pub fn on_write(self, result: ApiResult<Option<String>>) -> Self {
        self.writes.borrow_mut().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

fn unscripted<T>() -> ApiResult<T> {
    Err(ApiError::Transport("no scripted response".to_string()))
}

#[async_trait(?Send)]
impl BlogApi for FakeApi {
    type Upload = ImageUpload;

    fn base_url(&self) -> &str {
        BASE_URL
    }

    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        self.calls.borrow_mut().push(Call::List);
        self.lists.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn get_post(&self, id: &PostId) -> ApiResult<Post> {
        self.calls.borrow_mut().push(Call::Get(id.clone()));
        self.gets.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn save_post(&self, submission: PostSubmission<ImageUpload>) -> ApiResult<Option<String>> {
        self.calls.borrow_mut().push(Call::Save(submission));
        self.writes.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn delete_post(&self, id: &PostId) -> ApiResult<Option<String>> {
        self.calls.borrow_mut().push(Call::Delete(id.clone()));
        self.writes.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }
}

/// A post as the backend would return it
pub fn post(id: &str, title: &str, cover_image: Option<&str>) -> Post {
    Post {
        id: PostId::new(id),
        title: title.to_string(),
        message: format!("{} body", title),
        cover_image: cover_image.map(str::to_string),
        created_at: crate::model::parse_timestamp("2024-03-21T10:15:00Z"),
        updated_at: None,
    }
}
