//! Post List
//!
//! Featured post, card grid and the two-step delete flow.

use super::lifecycle::{Lifecycle, RequestSlot, Ticket};
use super::notice::Notice;
use crate::api::{resolve_cover, ApiError};
use crate::model::{Post, PostId};
use crate::route::Route;

pub const EMPTY_MESSAGE: &str = "Sorry, No Blogs Available at the Moment";
pub const CONFIRM_TITLE: &str = "Confirm Deletion";
pub const CONFIRM_BODY: &str =
    "Are you sure you want to delete this blog? This action cannot be undone.";

/// Stand-ins for list covers that fail to load
pub const FEATURED_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=No+Image";
pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=No+Image";

/// What the list area should render
#[derive(Debug, PartialEq)]
pub enum ListDisplay<'a> {
    Loading,
    Empty,
    Posts { featured: &'a Post, grid: &'a [Post] },
}

/// Everything a card needs to render one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: PostId,
    pub title: String,
    pub message: String,
    pub cover_image: Option<String>,
    /// Absent when the post has no creation time
    pub published: Option<String>,
    pub detail: Route,
    pub edit: Route,
}

impl PostCard {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            message: post.message.clone(),
            cover_image: post.cover_image.clone(),
            published: post.publish_line(),
            detail: Route::detail(post.id.clone()),
            edit: Route::edit(post.id.clone()),
        }
    }
}

/// Open delete confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub target: PostId,
    /// Confirmed and waiting for the backend
    pub busy: bool,
}

/// Result of applying a delete response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed(Notice),
    Failed(Notice),
    Stale,
}

/// State machine behind the post list
pub struct ListView {
    base_url: String,
    posts: Vec<Post>,
    banner: Option<Notice>,
    dialog: Option<ConfirmDialog>,
    lifecycle: Lifecycle,
    load: RequestSlot,
    delete: RequestSlot,
}

impl ListView {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            posts: Vec::new(),
            banner: None,
            dialog: None,
            lifecycle: Lifecycle::new(),
            load: RequestSlot::default(),
            delete: RequestSlot::default(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn banner(&self) -> Option<&Notice> {
        self.banner.as_ref()
    }

    pub fn dialog(&self) -> Option<&ConfirmDialog> {
        self.dialog.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_pending()
    }

    pub fn display(&self) -> ListDisplay<'_> {
        if self.is_loading() {
            return ListDisplay::Loading;
        }
        match self.posts.first() {
            None => ListDisplay::Empty,
            Some(featured) => ListDisplay::Posts {
                featured,
                grid: &self.posts,
            },
        }
    }

    pub fn cards(&self) -> Vec<PostCard> {
        self.posts.iter().map(PostCard::from_post).collect()
    }

    pub fn begin_load(&mut self) -> Ticket {
        tracing::debug!("Loading post list");
        self.lifecycle.begin(&mut self.load)
    }

    /// Apply the list response, resolving relative cover images.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<Post>, ApiError>) -> bool {
        if !self.lifecycle.settle(&mut self.load, ticket) {
            return false;
        }

        match result {
            Ok(mut posts) => {
                for post in &mut posts {
                    resolve_cover(&self.base_url, post);
                }
                self.posts = posts;
                if self.banner.as_ref().is_some_and(Notice::is_error) {
                    self.banner = None;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch posts");
                self.banner = Some(Notice::error(e.user_message("Failed to fetch blogs")));
            }
        }
        true
    }

    /// First step of delete: ask for confirmation.
    ///
    /// Ignored for unknown ids and while another delete is in flight.
    pub fn request_delete(&mut self, id: PostId) {
        if self.delete.is_pending() || !self.posts.iter().any(|post| post.id == id) {
            return;
        }
        self.dialog = Some(ConfirmDialog {
            target: id,
            busy: false,
        });
    }

    pub fn cancel_delete(&mut self) {
        if !self.delete.is_pending() {
            self.dialog = None;
        }
    }

    /// Second step: the user confirmed. Returns the request to send, or
    /// `None` if there is nothing to confirm or a delete is already running.
    pub fn confirm_delete(&mut self) -> Option<(Ticket, PostId)> {
        if self.delete.is_pending() {
            return None;
        }
        let dialog = self.dialog.as_mut()?;
        dialog.busy = true;
        let target = dialog.target.clone();
        let ticket = self.lifecycle.begin(&mut self.delete);
        tracing::debug!(id = %target, "Deleting post");
        Some((ticket, target))
    }

    /// Apply the delete response. The dialog closes on every applied outcome.
    pub fn finish_delete(
        &mut self,
        ticket: Ticket,
        result: Result<Option<String>, ApiError>,
    ) -> DeleteOutcome {
        if !self.lifecycle.settle(&mut self.delete, ticket) {
            return DeleteOutcome::Stale;
        }

        let target = self.dialog.take().map(|dialog| dialog.target);
        let outcome = match result {
            Ok(message) => {
                if let Some(target) = &target {
                    self.posts.retain(|post| &post.id != target);
                }
                let text = message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| "Blog deleted successfully".to_string());
                DeleteOutcome::Removed(Notice::success(text))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to delete post");
                DeleteOutcome::Failed(Notice::error(e.user_message("Failed to delete blog")))
            }
        };

        if let DeleteOutcome::Removed(notice) | DeleteOutcome::Failed(notice) = &outcome {
            self.banner = Some(notice.clone());
        }
        outcome
    }

    pub fn teardown(&mut self) {
        self.lifecycle.teardown();
    }
}
