//! Cover image URL resolution

use super::endpoint::join_url;
use crate::model::Post;

const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "//", "data:", "blob:"];

/// Whether an image reference can be rendered as-is
pub fn is_absolute(reference: &str) -> bool {
    let lowered = reference.trim_start().to_ascii_lowercase();
    ABSOLUTE_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// Resolve a server-relative image path against the API base.
///
/// Already-absolute references come back unchanged, so resolving twice is
/// the same as resolving once.
pub fn resolve_image_url(base_url: &str, reference: &str) -> String {
    if is_absolute(reference) {
        reference.to_string()
    } else {
        join_url(base_url, reference)
    }
}

/// Rewrite a post's cover image in place. Blank references are dropped.
pub fn resolve_cover(base_url: &str, post: &mut Post) {
    post.cover_image = post
        .cover_image
        .take()
        .filter(|reference| !reference.trim().is_empty())
        .map(|reference| resolve_image_url(base_url, &reference));
}
