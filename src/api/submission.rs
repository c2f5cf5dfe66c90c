//! Create/update payload

use super::endpoint::Endpoint;
use crate::model::PostId;

/// Form field carrying the method override
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Method the backend should apply when the override is present
pub const METHOD_OVERRIDE_UPDATE: &str = "PUT";

/// Multipart submission built by the form view.
///
/// `target` is `Some` when editing; the payload then carries the method
/// override so the backend applies update semantics to the POST.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSubmission<U> {
    pub target: Option<PostId>,
    pub title: String,
    pub message: String,
    pub cover_image: Option<U>,
}

impl<U> PostSubmission<U> {
    pub fn is_update(&self) -> bool {
        self.target.is_some()
    }

    pub fn endpoint(&self) -> Endpoint {
        match &self.target {
            Some(id) => Endpoint::UpdatePost(id.clone()),
            None => Endpoint::CreatePost,
        }
    }

    /// Text parts in send order. The cover image, if any, is appended by the
    /// transport.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("title", self.title.as_str()), ("message", self.message.as_str())];
        if self.is_update() {
            fields.push((METHOD_OVERRIDE_FIELD, METHOD_OVERRIDE_UPDATE));
        }
        fields
    }
}
