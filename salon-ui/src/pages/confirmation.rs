//! Booking Confirmation Page

use leptos::*;
use leptos_router::*;

#[component]
pub fn Confirmation() -> impl IntoView {
    let params = use_params_map();
    let booking_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"✅"</div>
            <h1 class="text-3xl font-bold mb-2">"Booking Confirmed"</h1>
            <p class="text-gray-400 mb-2">"We look forward to seeing you."</p>
            <p class="mb-6">
                <span class="text-gray-400">"Booking reference: "</span>
                <span class="font-mono font-semibold">{booking_id}</span>
            </p>
            <div class="flex space-x-3">
                <A
                    href="/"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Back to Home"
                </A>
                <A
                    href="/booking"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Book Another"
                </A>
            </div>
        </div>
    }
}
