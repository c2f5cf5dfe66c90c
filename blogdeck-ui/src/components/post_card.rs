//! Post Card Components
//!
//! Featured post banner and grid cards for the list page.

use leptos::*;
use leptos_router::*;

use blogdeck::model::PostId;
use blogdeck::view::list::{CARD_PLACEHOLDER_IMAGE, FEATURED_PLACEHOLDER_IMAGE};
use blogdeck::view::PostCard;

use super::CoverImage;

/// Large card for the newest post
#[component]
pub fn FeaturedPost(card: PostCard) -> impl IntoView {
    view! {
        <A href=card.detail.href() class="block mb-8 bg-white rounded-lg shadow-md text-gray-900">
            <div class="flex flex-col md:flex-row items-center">
                <div class="md:w-1/2">
                    <CoverImage
                        src=card.cover_image
                        alt=card.title.clone()
                        class="w-full h-60 object-cover rounded-t-lg md:rounded-l-lg md:rounded-t-none"
                        placeholder=FEATURED_PLACEHOLDER_IMAGE
                    />
                </div>
                <div class="md:w-1/2 p-6">
                    <p class="text-red-700 text-2xl font-bold uppercase">"Blogs"</p>
                    <h1 class="text-xl font-semibold mb-2">{card.title}</h1>
                    <p class="text-gray-600 line-clamp-3">{card.message}</p>
                    {published_line(card.published)}
                </div>
            </div>
        </A>
    }
}

/// Grid card with edit and delete actions
#[component]
pub fn PostCardView(card: PostCard, on_delete: Callback<PostId>) -> impl IntoView {
    let id = card.id.clone();

    view! {
        <div class="bg-white rounded-lg shadow-md p-6 hover:shadow-lg transition-shadow text-gray-900">
            <A href=card.detail.href() class="block cursor-pointer">
                <CoverImage
                    src=card.cover_image
                    alt=card.title.clone()
                    class="w-full h-48 object-cover rounded-md mb-4"
                    placeholder=CARD_PLACEHOLDER_IMAGE
                />
                <h2 class="text-xl font-semibold mb-2">{card.title}</h2>
                <p class="text-gray-600 line-clamp-3">{card.message}</p>
                {published_line(card.published)}
            </A>
            <div class="flex justify-end space-x-3 mt-4">
                <A
                    href=card.edit.href()
                    class="px-3 py-1 rounded-md bg-blue-600 hover:bg-blue-700 text-white text-sm"
                >
                    "Edit"
                </A>
                <button
                    class="px-3 py-1 rounded-md bg-red-600 hover:bg-red-700 text-white text-sm"
                    on:click=move |_| on_delete.call(id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

fn published_line(published: Option<String>) -> impl IntoView {
    published.map(|line| view! { <p class="text-gray-500 text-sm italic mt-2">{line}</p> })
}
