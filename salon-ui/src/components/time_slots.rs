//! Time Slot Grid
//!
//! Buttons for the slots returned by the availability lookup. Booked slots
//! render disabled.

use leptos::*;

use crate::components::InlineLoading;
use crate::state::BookingState;

#[component]
pub fn TimeSlots() -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    view! {
        <div class="space-y-3">
            <div class="flex items-center space-x-2">
                <h3 class="font-semibold">"Available times"</h3>
                <Show when=move || booking.wizard.with(|w| w.is_loading_slots())>
                    <InlineLoading />
                </Show>
            </div>

            {move || {
                let slots = booking.wizard.with(|w| w.slots().to_vec());
                if slots.is_empty() {
                    let hint = if booking.wizard.with(|w| w.state().date().is_some()) {
                        "No times available on this date"
                    } else {
                        "Pick a date to see available times"
                    };
                    return view! { <p class="text-gray-400 text-sm">{hint}</p> }.into_view();
                }

                view! {
                    <div class="grid grid-cols-3 md:grid-cols-4 gap-2">
                        {slots
                            .into_iter()
                            .map(|slot| {
                                let time = slot.time.clone();
                                let selected = {
                                    let time = time.clone();
                                    move || booking.wizard.with(|w| w.state().time() == Some(time.as_str()))
                                };
                                view! {
                                    <button
                                        disabled=!slot.available
                                        on:click=move |_| booking.select_time(&time)
                                        class=move || {
                                            let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                                            if !slot.available {
                                                format!("{} bg-gray-800 text-gray-600 line-through cursor-not-allowed", base)
                                            } else if selected() {
                                                format!("{} bg-primary-600 text-white", base)
                                            } else {
                                                format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                                            }
                                        }
                                    >
                                        {slot.time}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}
