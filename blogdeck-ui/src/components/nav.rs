//! Navigation Component
//!
//! Header navigation bar with brand, links and a mobile menu toggle.

use leptos::*;
use leptos_router::*;

use blogdeck::route::FORM_PATH;
use blogdeck::view::NavBar;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let nav = create_rw_signal(NavBar::default());
    let close = Callback::new(move |_: ()| nav.update(|n| n.close()));

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=FORM_PATH class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-white uppercase">"Blog App"</span>
                    </A>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLinks on_pick=close />
                    </div>

                    // Mobile toggle
                    <button
                        class="md:hidden px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(|n| n.toggle())
                    >
                        {move || if nav.with(|n| n.is_open()) { "✕" } else { "☰" }}
                    </button>
                </div>

                // Mobile links
                <Show when=move || nav.with(|n| n.is_open())>
                    <div class="md:hidden flex flex-col pb-4 space-y-1">
                        <NavLinks on_pick=close />
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavLinks(on_pick: Callback<()>) -> impl IntoView {
    NavBar::default()
        .links()
        .iter()
        .map(|link| {
            view! {
                <span on:click=move |_| on_pick.call(())>
                    <A
                        href=link.href
                        exact=true
                        class="block px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        active_class="bg-gray-700 text-white"
                    >
                        {link.label}
                    </A>
                </span>
            }
        })
        .collect_view()
}
