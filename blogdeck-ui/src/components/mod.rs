//! UI Components
//!
//! Reusable Leptos components for the blog pages.

pub mod confirm_dialog;
pub mod cover_image;
pub mod loading;
pub mod nav;
pub mod post_card;
pub mod toast;

pub use confirm_dialog::ConfirmDialog;
pub use cover_image::CoverImage;
pub use loading::Loading;
pub use nav::Nav;
pub use post_card::{FeaturedPost, PostCardView};
pub use toast::Toast;
