//! Blog backend API
//!
//! Everything the front-end needs to talk to the REST backend: the endpoint
//! table, URL handling, the submission payload, the error taxonomy and the
//! [`BlogApi`] seam that both the native client and the browser client
//! implement.
//!
//! # Endpoints
//!
//! | Operation | Method & path | Success |
//! |---|---|---|
//! | List | `GET blogs` | `{status: true, data: [Post]}` |
//! | Get one | `GET blogs/{id}` | `{status: true, data: Post}` |
//! | Create | `POST blogs` (multipart) | `{status: true, message}` |
//! | Update | `POST blogs/{id}` + `_method=PUT` | `{status: true, message}` |
//! | Delete | `DELETE blogs/{id}` | `{status: true, message}` |

mod endpoint;
mod error;
mod image;
mod response;
mod submission;

#[cfg(feature = "native")]
mod http;

#[cfg(test)]
pub(crate) mod testing;

pub use endpoint::{join_url, Endpoint, Method};
pub use error::{ApiError, ApiResult};
pub use image::{is_absolute, resolve_cover, resolve_image_url};
pub use response::decode_envelope;
pub use submission::{PostSubmission, METHOD_OVERRIDE_FIELD, METHOD_OVERRIDE_UPDATE};

#[cfg(feature = "native")]
pub use http::HttpBlogClient;

use async_trait::async_trait;

use crate::model::{Post, PostId};

/// The blog backend as seen by the views.
///
/// Futures are not required to be `Send`: the browser client holds JS
/// handles, and every host drives these calls from a single thread.
#[async_trait(?Send)]
pub trait BlogApi {
    /// Cover image payload this transport can upload
    type Upload;

    /// Base URL every endpoint (and relative image path) is resolved against
    fn base_url(&self) -> &str;

    /// `GET blogs`
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;

    /// `GET blogs/{id}`
    async fn get_post(&self, id: &PostId) -> ApiResult<Post>;

    /// `POST blogs` or `POST blogs/{id}` with the method override.
    /// Returns the server's message.
    async fn save_post(&self, submission: PostSubmission<Self::Upload>)
        -> ApiResult<Option<String>>;

    /// `DELETE blogs/{id}`. Returns the server's message.
    async fn delete_post(&self, id: &PostId) -> ApiResult<Option<String>>;
}
