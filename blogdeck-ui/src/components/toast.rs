//! Toast Notification Component
//!
//! Shows success and error messages.

use leptos::*;

use blogdeck::view::NoticeKind;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {move || {
                state.toast.get().map(|notice| {
                    let (icon, bg_class) = match notice.kind {
                        NoticeKind::Success => ("✓", "bg-green-600"),
                        NoticeKind::Error => ("✕", "bg-red-600"),
                    };
                    view! {
                        <div class=format!(
                            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                             transform transition-all duration-300 ease-out animate-slide-in",
                            bg_class
                        )>
                            <span class="text-lg">{icon}</span>
                            <span class="text-sm font-medium">{notice.text}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
