//! Post Form Page
//!
//! Create a post, or edit one when `?id=` is present.

use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsCast;

use blogdeck::api::BlogApi;
use blogdeck::model::{PostId, ACCEPTED_IMAGE_TYPES};
use blogdeck::route::LIST_PATH;
use blogdeck::view::{FieldUpdate, FormView, PreviewUrls, SubmitOutcome};

use crate::api::{ObjectUrls, SelectedFile};
use crate::app::use_route_id;
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Form page; remounts its body when the `id` query changes
#[component]
pub fn PostForm() -> impl IntoView {
    let editing = use_route_id();

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            {move || view! { <FormBody editing=editing.get() /> }}

            <A href=LIST_PATH class="inline-block text-primary-400 hover:text-primary-300">
                "View Blogs"
            </A>
        </div>
    }
}

#[component]
fn FormBody(editing: Option<PostId>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let previews: Box<dyn PreviewUrls<SelectedFile>> = Box::new(ObjectUrls);
    let form = create_rw_signal(FormView::new(state.api().base_url(), editing, previews));

    // Fetch the post being edited
    let state_for_load = state.clone();
    create_effect(move |_| {
        let Some((ticket, id)) = form.try_update(|f| f.begin_load()).flatten() else {
            return;
        };

        let api = state_for_load.api();
        spawn_local(async move {
            let result = api.get_post(&id).await;
            form.try_update(|f| f.finish_load(ticket, result));
        });
    });

    on_cleanup(move || {
        form.try_update_untracked(|f| f.teardown());
    });

    let on_file = move |ev: ev::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            form.update(|f| f.update(FieldUpdate::CoverImage(SelectedFile(file))));
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let (ticket, submission) = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(started)) => started,
            Some(Err(e)) => {
                web_sys::console::log_1(&format!("Submit refused: {}", e).into());
                return;
            }
            None => return,
        };

        let state = state.clone();
        let navigate = navigate.clone();
        let api = state.api();
        spawn_local(async move {
            let result = api.save_post(submission).await;
            if let Some(SubmitOutcome::Saved {
                notice,
                navigate_to,
            }) = form.try_update(|f| f.finish_submit(ticket, result))
            {
                state.show_notice(notice);
                navigate(&navigate_to.href(), Default::default());
            }
        });
    };

    let field_error = move |pick: fn(&FormView<SelectedFile>) -> Option<&'static str>| {
        move || form.with(pick).map(|error| view! { <p class="text-red-500 text-sm mt-1">{error}</p> })
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-6">
            <h1 class="text-3xl font-bold mb-6">{move || form.with(|f| f.heading())}</h1>

            // Load or submit failure
            {move || {
                form.with(|f| f.banner().filter(|n| n.is_error()).map(|n| n.text.clone()))
                    .map(|text| view! { <p class="mb-4 text-red-500">{text}</p> })
            }}

            <Show when=move || !form.with(|f| f.is_loading()) fallback=|| view! { <Loading /> }>
                <form class="space-y-4" on:submit=on_submit.clone()>
                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Title"</label>
                        <input
                            type="text"
                            class="w-full bg-gray-700 rounded-lg px-4 py-2"
                            prop:value=move || form.with(|f| f.draft().title.clone())
                            on:input=move |ev| {
                                form.update(|f| f.update(FieldUpdate::Title(event_target_value(&ev))))
                            }
                        />
                        {field_error(|f| f.field_errors().title)}
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Message"</label>
                        <textarea
                            rows="6"
                            class="w-full bg-gray-700 rounded-lg px-4 py-2"
                            prop:value=move || form.with(|f| f.draft().message.clone())
                            on:input=move |ev| {
                                form.update(|f| f.update(FieldUpdate::Message(event_target_value(&ev))))
                            }
                        />
                        {field_error(|f| f.field_errors().message)}
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-1">"Cover Image"</label>
                        <input
                            type="file"
                            accept=ACCEPTED_IMAGE_TYPES.join(",")
                            class="block w-full text-sm text-gray-300"
                            on:change=on_file
                        />
                        {move || {
                            form.with(|f| f.selected_file_name())
                                .map(|name| view! { <p class="text-sm text-gray-400 mt-1">{name}</p> })
                        }}
                        {move || {
                            form.with(|f| f.preview().map(|p| p.url().to_string()))
                                .map(|url| view! {
                                    <img src=url alt="Cover preview" class="mt-3 w-full h-48 object-cover rounded-lg" />
                                })
                        }}
                    </div>

                    <button
                        type="submit"
                        class="w-full px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors disabled:opacity-50"
                        disabled=move || form.with(|f| f.is_submitting())
                    >
                        {move || form.with(|f| f.submit_label())}
                    </button>
                </form>
            </Show>
        </div>
    }
}
