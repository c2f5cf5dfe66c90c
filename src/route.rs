//! Front-end routes
//!
//! - `/` - create/edit form (`?id=` switches to edit mode)
//! - `/view-blog` - post list
//! - `/blogs-details` - post detail (`?id=` required)
//!
//! Anything else resolves to [`Route::NotFound`].

use crate::model::PostId;

pub const FORM_PATH: &str = "/";
pub const LIST_PATH: &str = "/view-blog";
pub const DETAIL_PATH: &str = "/blogs-details";

/// A front-end location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Form { id: Option<PostId> },
    List,
    Detail { id: Option<PostId> },
    NotFound { path: String },
}

impl Route {
    pub fn create() -> Self {
        Route::Form { id: None }
    }

    pub fn edit(id: PostId) -> Self {
        Route::Form { id: Some(id) }
    }

    pub fn detail(id: PostId) -> Self {
        Route::Detail { id: Some(id) }
    }

    /// Parse a location such as `/blogs-details?id=3`. Scheme and host, if
    /// present, are ignored.
    pub fn parse(location: &str) -> Self {
        let location = strip_origin(location.trim());
        let location = location.split('#').next().unwrap_or_default();
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location, None),
        };
        Self::from_parts(path, query)
    }

    /// Build a route from a path and an optional raw query string
    pub fn from_parts(path: &str, query: Option<&str>) -> Self {
        let id = query
            .and_then(|query| query_param(query, "id"))
            .filter(|id| !id.trim().is_empty())
            .map(PostId::new);

        match normalize_path(path).as_str() {
            FORM_PATH => Route::Form { id },
            LIST_PATH => Route::List,
            DETAIL_PATH => Route::Detail { id },
            other => Route::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// The location this route renders at
    pub fn href(&self) -> String {
        match self {
            Route::Form { id: None } => FORM_PATH.to_string(),
            Route::Form { id: Some(id) } => with_id(FORM_PATH, id),
            Route::List => LIST_PATH.to_string(),
            Route::Detail { id: None } => DETAIL_PATH.to_string(),
            Route::Detail { id: Some(id) } => with_id(DETAIL_PATH, id),
            Route::NotFound { path } => path.clone(),
        }
    }
}

fn with_id(path: &str, id: &PostId) -> String {
    format!("{}?id={}", path, urlencoding::encode(id.as_str()))
}

/// Drop `scheme://host` from an absolute URL. A `://` inside the query or
/// fragment is not an origin.
fn strip_origin(location: &str) -> &str {
    if location.starts_with('/') {
        return location;
    }
    let Some(scheme_end) = location.find("://") else {
        return location;
    };
    if location[..scheme_end].contains(['?', '#']) {
        return location;
    }

    let rest = &location[scheme_end + 3..];
    match rest.find(['/', '?', '#']) {
        Some(idx) => &rest[idx..],
        None => "",
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// First value of `key` in a raw query string, percent-decoded
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(name) == key).then(|| decode(value))
        })
        .next()
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}
