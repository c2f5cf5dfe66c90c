//! Blogdeck Web
//!
//! Blog front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Create and edit posts with a cover image and live preview
//! - Featured post plus a card grid, with confirmed deletes
//! - Post detail pages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Screen state lives in the `blogdeck` crate's view machines,
//! held in signals here; requests go through `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
