//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use blogdeck::model::PostId;
use blogdeck::route::{Route as AppRoute, DETAIL_PATH, FORM_PATH, LIST_PATH};

use crate::components::{Nav, Toast};
use crate::pages::{PostDetail, PostForm, PostList};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=FORM_PATH view=PostForm />
                        <Route path=LIST_PATH view=PostList />
                        <Route path=DETAIL_PATH view=PostDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// The `id` of the current location, percent-decoded; blank counts as absent
pub fn use_route_id() -> Memo<Option<PostId>> {
    let location = use_location();
    create_memo(move |_| {
        match AppRoute::from_parts(&location.pathname.get(), Some(&location.search.get())) {
            AppRoute::Form { id } | AppRoute::Detail { id } => id,
            AppRoute::List | AppRoute::NotFound { .. } => None,
        }
    })
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=LIST_PATH
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Blogs"
            </A>
        </div>
    }
}
