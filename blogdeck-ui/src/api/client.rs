//! HTTP API Client
//!
//! `gloo-net` implementation of [`BlogApi`] for the browser.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use web_sys::FormData;

use blogdeck::api::{decode_envelope, ApiError, ApiResult, BlogApi, Endpoint, Method, PostSubmission};
use blogdeck::model::{Envelope, Post, PostId, Upload};
use blogdeck::view::PreviewUrls;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/";

const API_URL_KEY: &str = "blogdeck_api_url";

/// Get the API base URL from local storage (`blogdeck_api_url`) or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    base_or_default(stored)
}

fn base_or_default(stored: Option<String>) -> String {
    stored
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// A cover image picked through `<input type="file">`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile(pub web_sys::File);

impl Upload for SelectedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// Object URLs for local cover previews
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectUrls;

impl PreviewUrls<SelectedFile> for ObjectUrls {
    fn create(&self, upload: &SelectedFile) -> Option<String> {
        web_sys::Url::create_object_url_with_blob(&upload.0).ok()
    }

    fn revoke(&self, url: &str) {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}

/// Browser client for the blog backend
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the base URL saved in local storage
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);
        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };
        builder.header("Accept", "application/json")
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<Envelope<T>> {
        let status = response.status();
        let body = response.binary().await.map_err(transport_error)?;
        decode_envelope(status, &body)
    }

    fn build_form(submission: &PostSubmission<SelectedFile>) -> ApiResult<FormData> {
        let form = FormData::new().map_err(js_error)?;
        for (name, value) in submission.text_fields() {
            form.append_with_str(name, value).map_err(js_error)?;
        }

        if let Some(image) = &submission.cover_image {
            form.append_with_blob_and_filename("cover_image", &image.0, &image.0.name())
                .map_err(js_error)?;
        }

        Ok(form)
    }
}

#[async_trait(?Send)]
impl BlogApi for BrowserApi {
    type Upload = SelectedFile;

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let response = self
            .request(&Endpoint::ListPosts)
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope::<Vec<Post>>(response).await?.into_data()
    }

    async fn get_post(&self, id: &PostId) -> ApiResult<Post> {
        let response = self
            .request(&Endpoint::GetPost(id.clone()))
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope::<Post>(response).await?.into_data()
    }

    async fn save_post(&self, submission: PostSubmission<SelectedFile>) -> ApiResult<Option<String>> {
        let form = Self::build_form(&submission)?;
        let response = self
            .request(&submission.endpoint())
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope::<IgnoredAny>(response)
            .await?
            .into_message()
    }

    async fn delete_post(&self, id: &PostId) -> ApiResult<Option<String>> {
        let response = self
            .request(&Endpoint::DeletePost(id.clone()))
            .send()
            .await
            .map_err(transport_error)?;
        Self::read_envelope::<IgnoredAny>(response)
            .await?
            .into_message()
    }
}

fn transport_error(e: gloo_net::Error) -> ApiError {
    web_sys::console::warn_1(&format!("Blog backend request failed: {}", e).into());
    ApiError::Transport(e.to_string())
}

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(format!("Failed to build form data: {:?}", e))
}
