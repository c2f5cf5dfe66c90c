//! Post Detail
//!
//! Read-only view of one post, addressed by the `id` query parameter.

use super::lifecycle::{Lifecycle, RequestSlot, Ticket};
use crate::api::{resolve_cover, ApiError};
use crate::model::{Post, PostId};

pub const MISSING_ID_MESSAGE: &str = "No blog ID provided";
pub const NOT_FOUND_MESSAGE: &str = "No blog found";
pub const NO_COVER_MESSAGE: &str = "No cover image";

/// Shown when the cover image fails to load
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/800/600";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Idle,
    Loading,
    Loaded(Post),
    /// The backend answered but had no post to give
    NotFound,
    Failed(String),
}

/// State machine behind the detail page
pub struct DetailView {
    base_url: String,
    id: Option<PostId>,
    state: DetailState,
    lifecycle: Lifecycle,
    load: RequestSlot,
}

impl DetailView {
    pub fn new(base_url: impl Into<String>, id: Option<PostId>) -> Self {
        Self {
            base_url: base_url.into(),
            id,
            state: DetailState::Idle,
            lifecycle: Lifecycle::new(),
            load: RequestSlot::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    /// Start the fetch. Without an id the view fails immediately and
    /// nothing is sent.
    pub fn begin_load(&mut self) -> Option<(Ticket, PostId)> {
        let Some(id) = self.id.clone() else {
            self.state = DetailState::Failed(MISSING_ID_MESSAGE.to_string());
            return None;
        };
        self.state = DetailState::Loading;
        tracing::debug!(%id, "Loading post detail");
        Some((self.lifecycle.begin(&mut self.load), id))
    }

    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Post, ApiError>) -> bool {
        if !self.lifecycle.settle(&mut self.load, ticket) {
            return false;
        }

        self.state = match result {
            Ok(mut post) => {
                resolve_cover(&self.base_url, &mut post);
                DetailState::Loaded(post)
            }
            Err(ApiError::MissingData) => DetailState::NotFound,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch post detail");
                DetailState::Failed(e.user_message("Failed to fetch blog details"))
            }
        };
        true
    }

    pub fn teardown(&mut self) {
        self.lifecycle.teardown();
    }
}
