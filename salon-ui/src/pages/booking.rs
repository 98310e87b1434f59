//! Booking Page
//!
//! Four-step booking wizard: service, stylist, date and time, confirmation.

use leptos::*;
use leptos_router::*;
use salon_booking::booking::Step;
use salon_booking::catalog::ContactFields;

use crate::components::{CardSkeleton, DatePicker, LoadingOverlay, ServiceCard, StaffCard, StepProgress, TimeSlots};
use crate::state::{provide_booking_state, BookingState, GlobalState};

/// Booking page component
#[component]
pub fn Booking() -> impl IntoView {
    let booking = provide_booking_state();
    booking.load_catalog();

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Book an Appointment"</h1>
                <p class="text-gray-400 mt-1">"Choose a service, a stylist and a time that suits you"</p>
            </div>

            <StepProgress />

            <section id="booking-step" class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">{move || booking.current_step().title()}</h2>

                {move || match booking.current_step() {
                    Step::Service => view! { <ServiceStep /> }.into_view(),
                    Step::Staff => view! { <StaffStep /> }.into_view(),
                    Step::DateTime => view! { <DateTimeStep /> }.into_view(),
                    Step::Confirm => view! { <ConfirmStep /> }.into_view(),
                }}
            </section>

            <StepButtons />
        </div>
    }
}

#[component]
fn ServiceStep() -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            {move || {
                let services = booking.services.get();
                if services.is_empty() && state.loading.get() {
                    (0..4).map(|_| view! { <CardSkeleton /> }).collect_view()
                } else {
                    services
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

#[component]
fn StaffStep() -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    view! {
        <div class="grid md:grid-cols-2 gap-4">
            {move || {
                booking
                    .staff
                    .get()
                    .into_iter()
                    .map(|member| view! { <StaffCard member=member /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn DateTimeStep() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            <DatePicker />
            <TimeSlots />
        </div>
    }
}

#[component]
fn ConfirmStep() -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let notes = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut contact = ContactFields::new();
        for (key, signal) in [("name", name), ("email", email), ("phone", phone), ("notes", notes)] {
            let value = signal.get_untracked();
            if !value.trim().is_empty() {
                contact.insert(key.to_string(), value);
            }
        }
        booking.submit(contact, navigate.clone());
    };

    let summary = move || {
        let (date, time) = booking.wizard.with(|w| {
            (
                w.state().date().map(|d| d.format("%A, %B %e, %Y").to_string()),
                w.state().time().map(str::to_string),
            )
        });
        [
            ("Service", booking.service_name()),
            ("Stylist", booking.staff_name()),
            ("Date", date),
            ("Time", time),
        ]
    };

    view! {
        <LoadingOverlay loading=booking.submitting>
            <div class="grid md:grid-cols-2 gap-6">
                <dl class="space-y-2">
                    {move || {
                        summary()
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div class="flex justify-between border-b border-gray-700 py-2">
                                    <dt class="text-gray-400">{label}</dt>
                                    <dd class="font-medium">{value.unwrap_or_else(|| "-".to_string())}</dd>
                                </div>
                            })
                            .collect_view()
                    }}
                </dl>

                <form id="booking-form" class="space-y-3" on:submit=on_submit>
                    <ContactInput label="Name" kind="text" value=name />
                    <ContactInput label="Email" kind="email" value=email />
                    <ContactInput label="Phone" kind="tel" value=phone />
                    <label class="block">
                        <span class="text-sm text-gray-400">"Notes"</span>
                        <textarea
                            class="mt-1 w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2"
                            on:input=move |ev| notes.set(event_target_value(&ev))
                            prop:value=move || notes.get()
                        />
                    </label>
                    <button
                        type="submit"
                        disabled=move || booking.submitting.get()
                        class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors disabled:opacity-50"
                    >
                        "Confirm Booking"
                    </button>
                </form>
            </div>
        </LoadingOverlay>
    }
}

#[component]
fn ContactInput(label: &'static str, kind: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm text-gray-400">{label}</span>
            <input
                type=kind
                class="mt-1 w-full bg-gray-900 border border-gray-700 rounded-lg px-3 py-2"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
            />
        </label>
    }
}

/// Back and next buttons
#[component]
fn StepButtons() -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    view! {
        <div class="flex justify-between">
            <button
                class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                class:invisible=move || booking.current_step().is_first()
                on:click=move |_| booking.prev_step()
            >
                "Back"
            </button>
            <Show when=move || !booking.current_step().is_last()>
                <button
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    on:click=move |_| booking.next_step()
                >
                    "Next"
                </button>
            </Show>
        </div>
    }
}
