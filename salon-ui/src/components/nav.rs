//! Navigation Component
//!
//! Header navigation bar with brand, page links and the mobile menu.

use leptos::*;
use leptos_router::*;
use salon_booking::nav::{classify_link, is_active, LinkAction, NavLink as SiteLink, PAGE_TRANSITION_MS, SITE_LINKS};

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"✂️"</span>
                        <span class="text-xl font-bold text-white">"Salon"</span>
                    </A>

                    // Mobile menu toggle
                    <button
                        class="md:hidden px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                        aria-label="Toggle navigation"
                        on:click=move |_| state.toggle_menu()
                    >
                        {move || if state.menu.get().is_open() { "✕" } else { "☰" }}
                    </button>

                    // Desktop links
                    <div class="hidden md:flex items-center space-x-1">
                        {SITE_LINKS.iter().map(|link| view! { <NavLink link=*link /> }).collect_view()}
                    </div>
                </div>

                // Mobile links
                <Show when=move || state.menu.get().is_open()>
                    <div class="md:hidden flex flex-col pb-4 space-y-1">
                        {SITE_LINKS.iter().map(|link| view! { <NavLink link=*link /> }).collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(link: SiteLink) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let location = use_location();
    let navigate = use_navigate();

    let active = move || location.pathname.with(|path| is_active(link.href, path));

    let on_click = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        state.close_menu();
        follow_link(link.href, state, navigate.clone());
    };

    view! {
        <a
            href=link.href
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg transition-colors";
                if active() {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {link.label}
        </a>
    }
}

/// Scroll to an in-page anchor, or fade out and change page
fn follow_link(
    href: &str,
    state: GlobalState,
    navigate: impl Fn(&str, NavigateOptions) + Clone + 'static,
) {
    match classify_link(href) {
        LinkAction::ScrollTo(id) => {
            if scroll_to(&id) {
                return;
            }
            // Anchors live on the home page
            navigate("/", NavigateOptions::default());
            gloo_timers::callback::Timeout::new(PAGE_TRANSITION_MS, move || {
                scroll_to(&id);
            })
            .forget();
        }
        LinkAction::Navigate { href, delay_ms } => {
            let target = format!("/{}", href.trim_start_matches('/'));
            state.leaving.set(true);
            gloo_timers::callback::Timeout::new(delay_ms, move || {
                navigate(&target, NavigateOptions::default());
                state.leaving.set(false);
            })
            .forget();
        }
    }
}

/// Smooth-scroll to the element with `id`; false if it is not on the page
fn scroll_to(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    match element {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}
