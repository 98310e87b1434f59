//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Booking, Confirmation, Dashboard, Home};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area, faded out while a page change is pending
                <main
                    class="flex-1 container mx-auto px-4 py-8 pb-24 transition-opacity duration-300"
                    class:opacity-0=move || state.leaving.get()
                >
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/booking" view=Booking />
                        <Route path="/booking-confirmation/:id" view=Confirmation />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the loading indicator
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <span class="text-gray-400">
                    {format!("© {} Salon", chrono::Local::now().format("%Y"))}
                </span>

                <Show when=move || state.loading.get()>
                    <div class="flex items-center space-x-2 text-primary-400">
                        <div class="loading-spinner w-4 h-4" />
                        <span>"Loading..."</span>
                    </div>
                </Show>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Home"
            </A>
        </div>
    }
}
