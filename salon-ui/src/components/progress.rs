//! Step Progress Component
//!
//! Progress bar and numbered step indicators for the booking wizard.

use leptos::*;
use salon_booking::booking::Step;

use crate::state::BookingState;

#[component]
pub fn StepProgress() -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    view! {
        <div class="space-y-4">
            <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-primary-600 transition-all duration-300"
                    style=move || format!("width: {}%", booking.current_step().progress_percent())
                />
            </div>

            <ol class="grid grid-cols-4 gap-2 text-sm">
                {Step::all()
                    .into_iter()
                    .map(|step| {
                        let class = move || {
                            let current = booking.current_step();
                            let base = "flex items-center space-x-2";
                            if step == current {
                                format!("{} text-white font-semibold", base)
                            } else if step < current {
                                format!("{} text-primary-400", base)
                            } else {
                                format!("{} text-gray-500", base)
                            }
                        };
                        view! {
                            <li class=class>
                                <span class="w-6 h-6 rounded-full border flex items-center justify-center">
                                    {step.number()}
                                </span>
                                <span class="hidden md:inline">{step.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
