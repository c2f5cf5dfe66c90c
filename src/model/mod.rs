//! Data model
//!
//! The Post entity, the response envelope and cover image uploads.

mod envelope;
mod post;
mod upload;

pub use envelope::Envelope;
pub use post::{format_publish_date, parse_timestamp, Post, PostId};
pub use upload::{content_type_for, ImageUpload, Upload, ACCEPTED_IMAGE_TYPES};
