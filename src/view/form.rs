//! Create/Edit Form
//!
//! Draft state for the post form. The same machine serves both modes: with
//! an identifier it loads the stored post first and submits with the method
//! override, without one it starts blank and creates.

use std::fmt;
use thiserror::Error;

use super::lifecycle::{Lifecycle, RequestSlot, Ticket};
use super::notice::Notice;
use crate::api::{resolve_image_url, ApiError, PostSubmission};
use crate::model::{Post, PostId, Upload};
use crate::route::Route;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Creates and releases local preview URLs for selected files.
///
/// In the browser these are object URLs that leak unless revoked.
pub trait PreviewUrls<U> {
    fn create(&self, upload: &U) -> Option<String>;
    fn revoke(&self, url: &str);
}

/// Preview port for hosts that cannot show local files
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPreviews;

impl<U> PreviewUrls<U> for NoPreviews {
    fn create(&self, _upload: &U) -> Option<String> {
        None
    }

    fn revoke(&self, _url: &str) {}
}

/// What the cover image slot currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// Stored image of the post being edited
    Remote(String),
    /// Locally created URL for a freshly selected file
    Local(String),
}

impl Preview {
    pub fn url(&self) -> &str {
        match self {
            Preview::Remote(url) | Preview::Local(url) => url,
        }
    }
}

/// Unsaved form contents
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<U> {
    pub title: String,
    pub message: String,
    pub cover_image: Option<U>,
}

impl<U> Default for Draft<U> {
    fn default() -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            cover_image: None,
        }
    }
}

/// One edit to one field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<U> {
    Title(String),
    Message(String),
    CoverImage(U),
}

/// Per-field validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.message.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors: Vec<&str> = self.title.iter().chain(self.message.iter()).copied().collect();
        f.write_str(&errors.join("; "))
    }
}

/// Reasons a submit is refused before reaching the network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("A submission is already in progress")]
    SubmitInFlight,
}

/// Result of applying a submit response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; show the notice and go to the list
    Saved { notice: Notice, navigate_to: Route },
    /// Rejected or unreachable; the draft is kept for a retry
    Failed(Notice),
    /// Response arrived for a superseded request or an unmounted view
    Stale,
}

fn validate_title(title: &str) -> Option<&'static str> {
    title.trim().is_empty().then_some(TITLE_REQUIRED)
}

fn validate_message(message: &str) -> Option<&'static str> {
    message.trim().is_empty().then_some(MESSAGE_REQUIRED)
}

/// State machine behind the create/edit form
pub struct FormView<U> {
    base_url: String,
    editing: Option<PostId>,
    draft: Draft<U>,
    preview: Option<Preview>,
    previews: Box<dyn PreviewUrls<U>>,
    field_errors: FieldErrors,
    banner: Option<Notice>,
    lifecycle: Lifecycle,
    load: RequestSlot,
    submit: RequestSlot,
}

impl<U> FormView<U> {
    pub fn new(
        base_url: impl Into<String>,
        editing: Option<PostId>,
        previews: Box<dyn PreviewUrls<U>>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            editing,
            draft: Draft::default(),
            preview: None,
            previews,
            field_errors: FieldErrors::default(),
            banner: None,
            lifecycle: Lifecycle::new(),
            load: RequestSlot::default(),
            submit: RequestSlot::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<&PostId> {
        self.editing.as_ref()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Blog"
        } else {
            "Add Blog"
        }
    }

    pub fn draft(&self) -> &Draft<U> {
        &self.draft
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Inline message under the heading
    pub fn banner(&self) -> Option<&Notice> {
        self.banner.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_pending()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.is_pending()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Saving..."
        } else {
            "Submit"
        }
    }

    /// Start fetching the post being edited. `None` in create mode.
    pub fn begin_load(&mut self) -> Option<(Ticket, PostId)> {
        let id = self.editing.clone()?;
        let ticket = self.lifecycle.begin(&mut self.load);
        tracing::debug!(%id, "Loading post into form");
        Some((ticket, id))
    }

    /// Apply the fetched post. Returns whether the response was applied.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Post, ApiError>) -> bool {
        if !self.lifecycle.settle(&mut self.load, ticket) {
            return false;
        }

        match result {
            Ok(post) => {
                self.draft.title = post.title;
                self.draft.message = post.message;
                // Binary data is never pre-filled; only the stored image is previewed.
                self.draft.cover_image = None;
                let remote = post
                    .cover_image
                    .filter(|reference| !reference.trim().is_empty())
                    .map(|reference| Preview::Remote(resolve_image_url(&self.base_url, &reference)));
                self.replace_preview(remote);
                self.field_errors = FieldErrors::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load post into form");
                let fallback = if e.is_transport() {
                    "Failed to fetch blog data"
                } else {
                    "Failed to fetch blog"
                };
                self.banner = Some(Notice::error(e.user_message(fallback)));
            }
        }
        true
    }

    /// Apply one field edit, re-checking only that field.
    pub fn update(&mut self, update: FieldUpdate<U>) {
        match update {
            FieldUpdate::Title(title) => {
                if self.field_errors.title.is_some() {
                    self.field_errors.title = validate_title(&title);
                }
                self.draft.title = title;
            }
            FieldUpdate::Message(message) => {
                if self.field_errors.message.is_some() {
                    self.field_errors.message = validate_message(&message);
                }
                self.draft.message = message;
            }
            FieldUpdate::CoverImage(upload) => {
                let local = self.previews.create(&upload).map(Preview::Local);
                self.replace_preview(local);
                self.draft.cover_image = Some(upload);
            }
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            title: validate_title(&self.draft.title),
            message: validate_message(&self.draft.message),
        };
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Apply the submit response.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: Result<Option<String>, ApiError>,
    ) -> SubmitOutcome {
        if !self.lifecycle.settle(&mut self.submit, ticket) {
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(message) => {
                let text = message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| {
                        if self.is_editing() {
                            "Blog updated successfully".to_string()
                        } else {
                            "Blog created successfully".to_string()
                        }
                    });
                let notice = Notice::success(text);
                self.banner = Some(notice.clone());
                SubmitOutcome::Saved {
                    notice,
                    navigate_to: Route::List,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, editing = self.is_editing(), "Failed to save post");
                let fallback = if self.is_editing() {
                    "Failed to update blog"
                } else {
                    "Failed to create blog"
                };
                let notice = Notice::error(e.user_message(fallback));
                self.banner = Some(notice.clone());
                SubmitOutcome::Failed(notice)
            }
        }
    }

    /// Unmount: late responses are ignored and the local preview is released.
    pub fn teardown(&mut self) {
        self.lifecycle.teardown();
        self.replace_preview(None);
    }

    fn replace_preview(&mut self, next: Option<Preview>) {
        if let Some(Preview::Local(url)) = &self.preview {
            self.previews.revoke(url);
        }
        self.preview = next;
    }
}

impl<U: Clone> FormView<U> {
    /// Validate and build the multipart payload.
    ///
    /// Refused while another submit is outstanding. The draft stays in place
    /// so a failed submit can be retried.
    pub fn begin_submit(&mut self) -> Result<(Ticket, PostSubmission<U>), FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmitInFlight);
        }

        if let Err(errors) = self.validate() {
            self.field_errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }
        self.field_errors = FieldErrors::default();

        let submission = PostSubmission {
            target: self.editing.clone(),
            title: self.draft.title.trim().to_string(),
            message: self.draft.message.trim().to_string(),
            cover_image: self.draft.cover_image.clone(),
        };
        let ticket = self.lifecycle.begin(&mut self.submit);
        tracing::debug!(editing = self.is_editing(), "Submitting post");
        Ok((ticket, submission))
    }
}

impl<U: Upload> FormView<U> {
    /// Name of the selected cover file, if any
    pub fn selected_file_name(&self) -> Option<String> {
        self.draft.cover_image.as_ref().map(Upload::file_name)
    }
}

impl<U> Drop for FormView<U> {
    fn drop(&mut self) {
        self.replace_preview(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{post, BASE_URL};
    use crate::model::ImageUpload;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Hands out `blob:N` URLs and records revocations
    #[derive(Clone, Default)]
    struct RecordingPreviews {
        created: Rc<RefCell<u32>>,
        revoked: Rc<RefCell<Vec<String>>>,
    }

    impl PreviewUrls<ImageUpload> for RecordingPreviews {
        fn create(&self, _upload: &ImageUpload) -> Option<String> {
            let mut created = self.created.borrow_mut();
            *created += 1;
            Some(format!("blob:{}", created))
        }

        fn revoke(&self, url: &str) {
            self.revoked.borrow_mut().push(url.to_string());
        }
    }

    fn create_form() -> FormView<ImageUpload> {
        FormView::new(BASE_URL, None, Box::new(NoPreviews))
    }

    fn edit_form(previews: RecordingPreviews) -> FormView<ImageUpload> {
        FormView::new(BASE_URL, Some(PostId::new("7")), Box::new(previews))
    }

    fn fill(form: &mut FormView<ImageUpload>, title: &str, message: &str) {
        form.update(FieldUpdate::Title(title.to_string()));
        form.update(FieldUpdate::Message(message.to_string()));
    }

    #[test]
    fn test_create_mode_has_nothing_to_load() {
        let mut form = create_form();
        assert_eq!(form.heading(), "Add Blog");
        assert!(form.begin_load().is_none());
        assert!(!form.is_loading());
    }

    #[test]
    fn test_empty_fields_rejected_before_network() {
        let mut form = create_form();
        fill(&mut form, "   ", "");

        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err,
            FormError::Invalid(FieldErrors {
                title: Some(TITLE_REQUIRED),
                message: Some(MESSAGE_REQUIRED),
            })
        );
        assert!(!form.is_submitting());
        assert_eq!(form.field_errors().title, Some(TITLE_REQUIRED));
    }

    #[test]
    fn test_field_errors_clear_independently() {
        let mut form = create_form();
        assert!(form.begin_submit().is_err());

        form.update(FieldUpdate::Title("Hello".to_string()));
        assert_eq!(form.field_errors().title, None);
        assert_eq!(form.field_errors().message, Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn test_submission_is_trimmed_and_create_shaped() {
        let mut form = create_form();
        fill(&mut form, "  T  ", "\nM\n");

        let (_, submission) = form.begin_submit().unwrap();
        assert_eq!(submission.target, None);
        assert_eq!(submission.title, "T");
        assert_eq!(submission.message, "M");
        assert!(submission.cover_image.is_none());
        assert_eq!(form.submit_label(), "Saving...");
    }

    #[test]
    fn test_double_submit_refused() {
        let mut form = create_form();
        fill(&mut form, "T", "M");

        let (ticket, _) = form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), FormError::SubmitInFlight);

        form.finish_submit(ticket, Err(ApiError::Transport("down".to_string())));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_load_populates_text_and_remote_preview() {
        let mut form = edit_form(RecordingPreviews::default());
        assert_eq!(form.heading(), "Edit Blog");

        let (ticket, id) = form.begin_load().unwrap();
        assert_eq!(id, PostId::new("7"));
        assert!(form.is_loading());

        assert!(form.finish_load(ticket, Ok(post("7", "Stored", Some("/storage/c.png")))));
        assert_eq!(form.draft().title, "Stored");
        assert_eq!(form.draft().message, "Stored body");
        assert!(form.draft().cover_image.is_none());
        assert_eq!(
            form.preview(),
            Some(&Preview::Remote("http://backend.test/api/storage/c.png".to_string()))
        );
    }

    #[test]
    fn test_load_failure_messages() {
        let mut form = edit_form(RecordingPreviews::default());
        let (ticket, _) = form.begin_load().unwrap();
        form.finish_load(ticket, Err(ApiError::Transport("refused".to_string())));
        assert_eq!(form.banner().unwrap().text, "Failed to fetch blog data");

        let (ticket, _) = form.begin_load().unwrap();
        form.finish_load(ticket, Err(ApiError::Rejected { message: None }));
        assert_eq!(form.banner().unwrap().text, "Failed to fetch blog");

        let (ticket, _) = form.begin_load().unwrap();
        form.finish_load(
            ticket,
            Err(ApiError::Rejected {
                message: Some("Blog not found".to_string()),
            }),
        );
        assert_eq!(form.banner().unwrap().text, "Blog not found");
    }

    #[test]
    fn test_edit_submission_carries_override_target() {
        let mut form = edit_form(RecordingPreviews::default());
        fill(&mut form, "T", "M");

        let (_, submission) = form.begin_submit().unwrap();
        assert_eq!(submission.target, Some(PostId::new("7")));
        assert!(submission
            .text_fields()
            .contains(&(crate::api::METHOD_OVERRIDE_FIELD, "PUT")));
        assert!(submission.cover_image.is_none());
    }

    #[test]
    fn test_selected_image_is_sent_and_previewed() {
        let previews = RecordingPreviews::default();
        let mut form = edit_form(previews.clone());
        fill(&mut form, "T", "M");

        let upload = ImageUpload::new("new.png", vec![9, 9]);
        form.update(FieldUpdate::CoverImage(upload.clone()));
        assert_eq!(form.preview(), Some(&Preview::Local("blob:1".to_string())));
        assert_eq!(form.selected_file_name().as_deref(), Some("new.png"));

        let (_, submission) = form.begin_submit().unwrap();
        assert_eq!(submission.cover_image, Some(upload));
    }

    #[test]
    fn test_superseded_and_final_previews_are_revoked() {
        let previews = RecordingPreviews::default();
        let mut form = edit_form(previews.clone());

        let (ticket, _) = form.begin_load().unwrap();
        form.finish_load(ticket, Ok(post("7", "Stored", Some("/storage/c.png"))));

        form.update(FieldUpdate::CoverImage(ImageUpload::new("a.png", vec![1])));
        // Replacing a remote preview revokes nothing.
        assert!(previews.revoked.borrow().is_empty());

        form.update(FieldUpdate::CoverImage(ImageUpload::new("b.png", vec![2])));
        assert_eq!(*previews.revoked.borrow(), vec!["blob:1".to_string()]);

        form.teardown();
        assert_eq!(
            *previews.revoked.borrow(),
            vec!["blob:1".to_string(), "blob:2".to_string()]
        );

        drop(form);
        assert_eq!(previews.revoked.borrow().len(), 2);
    }

    #[test]
    fn test_drop_releases_local_preview() {
        let previews = RecordingPreviews::default();
        let mut form = edit_form(previews.clone());
        form.update(FieldUpdate::CoverImage(ImageUpload::new("a.png", vec![1])));
        drop(form);
        assert_eq!(*previews.revoked.borrow(), vec!["blob:1".to_string()]);
    }

    #[test]
    fn test_successful_submit_navigates_to_list() {
        let mut form = create_form();
        fill(&mut form, "T", "M");
        let (ticket, _) = form.begin_submit().unwrap();

        let outcome = form.finish_submit(ticket, Ok(Some("Blog created successfully".to_string())));
        assert_eq!(
            outcome,
            SubmitOutcome::Saved {
                notice: Notice::success("Blog created successfully"),
                navigate_to: Route::List,
            }
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_rejected_submit_stays_and_keeps_draft() {
        let mut form = edit_form(RecordingPreviews::default());
        fill(&mut form, "T", "M");
        let (ticket, _) = form.begin_submit().unwrap();

        let outcome = form.finish_submit(
            ticket,
            Err(ApiError::Rejected {
                message: Some("The title has already been taken.".to_string()),
            }),
        );
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(Notice::error("The title has already been taken."))
        );
        assert_eq!(form.draft().title, "T");
        assert_eq!(form.draft().message, "M");
    }

    #[test]
    fn test_submit_fallback_messages() {
        let mut form = create_form();
        fill(&mut form, "T", "M");
        let (ticket, _) = form.begin_submit().unwrap();
        let outcome = form.finish_submit(ticket, Err(ApiError::Http { status: 500 }));
        assert_eq!(outcome, SubmitOutcome::Failed(Notice::error("Failed to create blog")));

        let mut form = edit_form(RecordingPreviews::default());
        fill(&mut form, "T", "M");
        let (ticket, _) = form.begin_submit().unwrap();
        let outcome = form.finish_submit(ticket, Err(ApiError::Transport("down".to_string())));
        assert_eq!(outcome, SubmitOutcome::Failed(Notice::error("Failed to update blog")));
    }

    #[test]
    fn test_responses_after_teardown_are_stale() {
        let mut form = edit_form(RecordingPreviews::default());
        let (load_ticket, _) = form.begin_load().unwrap();
        fill(&mut form, "Typed", "Draft");
        let (submit_ticket, _) = form.begin_submit().unwrap();

        form.teardown();
        assert!(!form.finish_load(load_ticket, Ok(post("7", "Late", None))));
        assert_eq!(form.draft().title, "Typed");
        assert_eq!(
            form.finish_submit(submit_ticket, Ok(Some("ok".to_string()))),
            SubmitOutcome::Stale
        );
    }

    #[test]
    fn test_superseded_load_is_ignored() {
        let mut form = edit_form(RecordingPreviews::default());
        let (first, _) = form.begin_load().unwrap();
        let (second, _) = form.begin_load().unwrap();

        assert!(form.finish_load(second, Ok(post("7", "Fresh", None))));
        assert!(!form.finish_load(first, Ok(post("7", "Old", None))));
        assert_eq!(form.draft().title, "Fresh");
    }
}
