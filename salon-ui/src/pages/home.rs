//! Home Page
//!
//! Landing section and contact details; the `#home` and `#contact` header
//! links scroll here.

use leptos::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-16">
            <section id="home" class="text-center py-16">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">"Look Good, Feel Great"</h1>
                <p class="text-gray-400 text-lg mb-8">
                    "Cuts, color and styling by our experienced team."
                </p>
                <A
                    href="/booking"
                    class="px-8 py-4 bg-primary-600 hover:bg-primary-700 rounded-lg font-semibold transition-colors"
                >
                    "Book Now"
                </A>
            </section>

            <section id="contact" class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-2xl font-semibold mb-4">"Contact"</h2>
                <div class="grid md:grid-cols-3 gap-4 text-gray-300">
                    <div>
                        <h3 class="font-semibold text-white">"Opening hours"</h3>
                        <p>"Monday to Friday, 9:00 - 18:00"</p>
                    </div>
                    <div>
                        <h3 class="font-semibold text-white">"Phone"</h3>
                        <p>"Call us to change or cancel a booking"</p>
                    </div>
                    <div>
                        <h3 class="font-semibold text-white">"Online"</h3>
                        <A href="/booking" class="text-primary-400 hover:underline">"Book an appointment"</A>
                    </div>
                </div>
            </section>
        </div>
    }
}
