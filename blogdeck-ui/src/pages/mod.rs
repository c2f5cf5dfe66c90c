//! Application Pages
//!
//! Top-level routed pages.

pub mod post_detail;
pub mod post_form;
pub mod post_list;

pub use post_detail::PostDetail;
pub use post_form::PostForm;
pub use post_list::PostList;
