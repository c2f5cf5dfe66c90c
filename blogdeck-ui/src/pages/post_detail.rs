//! Post Detail Page

use leptos::*;
use leptos_router::*;

use blogdeck::api::BlogApi;
use blogdeck::model::PostId;
use blogdeck::route::LIST_PATH;
use blogdeck::view::detail::NOT_FOUND_MESSAGE;
use blogdeck::view::{DetailState, DetailView};

use crate::app::use_route_id;
use crate::components::{CoverImage, Loading};
use crate::state::global::GlobalState;

/// Detail page; remounts its body when the `id` query changes
#[component]
pub fn PostDetail() -> impl IntoView {
    let id = use_route_id();

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            {move || view! { <DetailBody id=id.get() /> }}

            <A href=LIST_PATH class="inline-block px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg">
                "Go Back"
            </A>
        </div>
    }
}

#[component]
fn DetailBody(id: Option<PostId>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let detail = create_rw_signal(DetailView::new(state.api().base_url(), id));

    // Fetch the post on mount
    create_effect(move |_| {
        let Some((ticket, id)) = detail.try_update(|v| v.begin_load()).flatten() else {
            return;
        };

        let api = state.api();
        spawn_local(async move {
            let result = api.get_post(&id).await;
            detail.try_update(|v| v.finish_load(ticket, result));
        });
    });

    on_cleanup(move || {
        detail.try_update_untracked(|v| v.teardown());
    });

    move || match detail.with(|v| v.state().clone()) {
        DetailState::Idle | DetailState::Loading => view! { <Loading /> }.into_view(),
        DetailState::NotFound => {
            view! { <p class="text-center text-gray-400">{NOT_FOUND_MESSAGE}</p> }.into_view()
        }
        DetailState::Failed(message) => {
            view! { <p class="text-center text-red-500">{message}</p> }.into_view()
        }
        DetailState::Loaded(post) => {
            let published = post.publish_line();
            view! {
                <article class="bg-white text-gray-900 rounded-lg shadow-md overflow-hidden">
                    <CoverImage
                        src=post.cover_image
                        alt=post.title.clone()
                        class="w-full h-80 object-cover"
                    />
                    <div class="p-6 space-y-4">
                        <h1 class="text-3xl font-bold">{post.title}</h1>
                        {published.map(|line| view! { <p class="text-gray-500 text-sm italic">{line}</p> })}
                        <p class="text-gray-700 whitespace-pre-line">{post.message}</p>
                    </div>
                </article>
            }
            .into_view()
        }
    }
}
