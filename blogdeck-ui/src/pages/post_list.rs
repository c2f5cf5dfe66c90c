//! Post List Page
//!
//! Featured post, card grid and confirmed deletes.

use leptos::*;
use leptos_router::*;

use blogdeck::api::BlogApi;
use blogdeck::model::PostId;
use blogdeck::route::FORM_PATH;
use blogdeck::view::list::EMPTY_MESSAGE;
use blogdeck::view::{DeleteOutcome, ListDisplay, ListView, PostCard};

use crate::components::{ConfirmDialog, FeaturedPost, Loading, PostCardView};
use crate::state::global::GlobalState;

#[component]
pub fn PostList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let list = create_rw_signal(ListView::new(state.api().base_url()));

    // Fetch posts on mount
    let state_for_load = state.clone();
    create_effect(move |_| {
        let Some(ticket) = list.try_update(|v| v.begin_load()) else {
            return;
        };

        let api = state_for_load.api();
        spawn_local(async move {
            let result = api.list_posts().await;
            list.try_update(|v| v.finish_load(ticket, result));
        });
    });

    on_cleanup(move || {
        list.try_update_untracked(|v| v.teardown());
    });

    let on_delete = Callback::new(move |id: PostId| list.update(|v| v.request_delete(id)));
    let on_cancel = Callback::new(move |_: ()| list.update(|v| v.cancel_delete()));

    let state_for_delete = state.clone();
    let on_confirm = Callback::new(move |_: ()| {
        let Some((ticket, id)) = list.try_update(|v| v.confirm_delete()).flatten() else {
            return;
        };

        let state = state_for_delete.clone();
        let api = state.api();
        spawn_local(async move {
            let result = api.delete_post(&id).await;
            match list.try_update(|v| v.finish_delete(ticket, result)) {
                Some(DeleteOutcome::Removed(notice)) | Some(DeleteOutcome::Failed(notice)) => {
                    state.show_notice(notice);
                }
                Some(DeleteOutcome::Stale) | None => {}
            }
        });
    });

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <h1 class="text-4xl font-bold uppercase">"Blogs"</h1>
                <A
                    href=FORM_PATH
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add New Blog"
                </A>
            </div>

            // Load error
            {move || {
                list.with(|v| v.banner().filter(|n| n.is_error()).map(|n| n.text.clone()))
                    .map(|text| view! { <p class="text-center text-red-500">{text}</p> })
            }}

            // Posts
            {move || {
                let cards = list.with(|v| match v.display() {
                    ListDisplay::Loading => None,
                    ListDisplay::Empty => Some(Vec::new()),
                    ListDisplay::Posts { grid, .. } => {
                        Some(grid.iter().map(PostCard::from_post).collect::<Vec<_>>())
                    }
                });

                match cards {
                    None => view! { <Loading /> }.into_view(),
                    Some(cards) if cards.is_empty() => view! {
                        <div class="flex flex-col pt-10 items-center justify-center">
                            <p class="text-lg font-medium text-red-600 mb-4">{EMPTY_MESSAGE}</p>
                        </div>
                    }
                    .into_view(),
                    Some(cards) => {
                        let featured = cards[0].clone();
                        view! {
                            <FeaturedPost card=featured />
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {cards
                                    .into_iter()
                                    .map(|card| view! { <PostCardView card=card on_delete=on_delete /> })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                }
            }}

            // Delete confirmation
            {move || {
                list.with(|v| v.dialog().map(|dialog| dialog.busy)).map(|busy| view! {
                    <ConfirmDialog busy=busy on_confirm=on_confirm on_cancel=on_cancel />
                })
            }}
        </div>
    }
}
