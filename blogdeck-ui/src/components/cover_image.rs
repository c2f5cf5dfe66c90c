//! Cover Image Component
//!
//! Post cover with a placeholder when the image fails to load.

use leptos::*;
use wasm_bindgen::JsCast;

use blogdeck::view::detail::{NO_COVER_MESSAGE, PLACEHOLDER_IMAGE};

#[component]
pub fn CoverImage(
    src: Option<String>,
    #[prop(into)]
    alt: String,
    #[prop(default = "w-full h-60 object-cover")]
    class: &'static str,
    /// Swapped in when the cover fails to load
    #[prop(default = PLACEHOLDER_IMAGE)]
    placeholder: &'static str,
) -> impl IntoView {
    match src {
        Some(src) => view! {
            <img
                src=src
                alt=alt
                class=class
                on:error=move |ev| {
                    let img = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlImageElement>().ok());
                    if let Some(img) = img {
                        // Only swap once so a broken placeholder cannot loop.
                        if img.src() != placeholder {
                            web_sys::console::warn_1(
                                &format!("Failed to load image: {}", img.src()).into(),
                            );
                            img.set_src(placeholder);
                        }
                    }
                }
            />
        }
        .into_view(),
        None => view! { <p class="text-gray-500 p-4">{NO_COVER_MESSAGE}</p> }.into_view(),
    }
}
