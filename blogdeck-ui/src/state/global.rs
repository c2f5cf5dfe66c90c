//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use blogdeck::view::{Notice, TOAST_TIMEOUT_MS};

use crate::api::BrowserApi;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Backend client, fixed for the session
    pub api: StoredValue<BrowserApi>,
    /// Toast currently on screen
    pub toast: RwSignal<Option<Notice>>,
    /// Bumped per toast so an old timer cannot clear a newer one
    toast_generation: RwSignal<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api: store_value(BrowserApi::from_storage()),
        toast: create_rw_signal(None),
        toast_generation: create_rw_signal(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Backend client handle for an async task
    pub fn api(&self) -> BrowserApi {
        self.api.get_value()
    }

    /// Show a toast (auto-clears after timeout)
    pub fn show_notice(&self, notice: Notice) {
        if notice.is_error() {
            web_sys::console::error_1(&notice.text.clone().into());
        }

        let generation = self.toast_generation.get_untracked() + 1;
        self.toast_generation.set(generation);
        self.toast.set(Some(notice));

        let toast = self.toast;
        let current = self.toast_generation;
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
            if current.try_get_untracked() == Some(generation) {
                toast.set(None);
            }
        })
        .forget();
    }
}
