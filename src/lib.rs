//! # Blogdeck
//!
//! Front-end for a minimal REST blog: create, list, read, edit and delete
//! posts with an optional cover image.
//!
//! ## Modules
//!
//! - [`model`]: Post record, response envelope, image uploads
//! - [`api`]: Endpoint table, error taxonomy and the [`api::BlogApi`] seam
//! - [`view`]: Host-independent state machines for every screen
//! - [`route`]: Front-end locations and query parameters
//! - [`driver`]: Runs view actions end-to-end against a backend
//!
//! With the `native` feature (default):
//!
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: `tracing-subscriber` set-up
//! - [`term`]: Plain-text rendering for the terminal front-end
//! - [`stub`]: In-memory reference backend
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blogdeck::api::HttpBlogClient;
//! use blogdeck::config::Config;
//! use blogdeck::view::ListView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().config;
//!     let client = HttpBlogClient::from_config(&config.api)?;
//!
//!     let mut list = ListView::new(config.api.base_url.clone());
//!     blogdeck::driver::load_list(&mut list, &client).await;
//!
//!     println!("{}", blogdeck::term::render_list(&list));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod driver;
pub mod model;
pub mod route;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod stub;
#[cfg(feature = "native")]
pub mod term;

pub use api::{ApiError, ApiResult, BlogApi};
pub use model::{Envelope, Post, PostId};
pub use route::Route;
