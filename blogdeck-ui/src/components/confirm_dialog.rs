//! Delete Confirmation Dialog

use leptos::*;

use blogdeck::view::list::{CONFIRM_BODY, CONFIRM_TITLE};

#[component]
pub fn ConfirmDialog(
    /// Confirmed and waiting for the backend
    busy: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-40">
            <div class="bg-white text-gray-900 rounded-lg shadow-xl p-6 w-full max-w-md">
                <h2 class="text-xl font-bold mb-2">{CONFIRM_TITLE}</h2>
                <p class="text-gray-600 mb-6">{CONFIRM_BODY}</p>
                <div class="flex justify-end space-x-3">
                    <button
                        class="px-4 py-2 rounded-lg bg-gray-200 hover:bg-gray-300"
                        disabled=busy
                        on:click=move |_| on_cancel.call(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="px-4 py-2 rounded-lg bg-red-600 hover:bg-red-700 text-white"
                        disabled=busy
                        on:click=move |_| on_confirm.call(())
                    >
                        {if busy { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
