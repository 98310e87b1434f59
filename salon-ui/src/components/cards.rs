//! Selection Cards
//!
//! Clickable service and staff cards for the first two wizard steps.

use leptos::*;
use salon_booking::catalog::{Service, StaffMember};

use crate::state::BookingState;

fn card_class(selected: bool) -> &'static str {
    if selected {
        "text-left p-4 rounded-lg border-2 border-primary-500 bg-gray-700 transition-colors"
    } else {
        "text-left p-4 rounded-lg border-2 border-gray-700 bg-gray-800 hover:border-gray-500 transition-colors"
    }
}

/// Service card; clicking it selects the service
#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    let id = service.id.clone();
    let selected = {
        let id = id.clone();
        move || booking.wizard.with(|w| w.state().service() == Some(&id))
    };

    view! {
        <button
            class=move || card_class(selected())
            on:click=move |_| booking.select_service(id.clone())
        >
            <div class="flex items-center justify-between">
                <h3 class="font-semibold text-lg">{service.name.clone()}</h3>
                <span class="text-primary-400 font-bold">{service.price_label()}</span>
            </div>
            <p class="text-gray-400 text-sm mt-1">{format!("{} min", service.duration)}</p>
            <p class="text-gray-300 text-sm mt-2">{service.description.clone()}</p>
        </button>
    }
}

/// Staff card; clicking it selects the staff member
#[component]
pub fn StaffCard(member: StaffMember) -> impl IntoView {
    let booking = use_context::<BookingState>().expect("BookingState not found");

    let id = member.id.clone();
    let selected = {
        let id = id.clone();
        move || booking.wizard.with(|w| w.state().staff() == Some(&id))
    };

    view! {
        <button
            class=move || card_class(selected())
            on:click=move |_| booking.select_staff(id.clone())
        >
            <div class="flex items-center space-x-4">
                <img
                    src=member.avatar.clone()
                    alt=member.name.clone()
                    class="w-14 h-14 rounded-full object-cover bg-gray-600"
                />
                <div>
                    <h3 class="font-semibold">{member.name.clone()}</h3>
                    <p class="text-gray-400 text-sm">{member.role.clone()}</p>
                    <p class="text-yellow-400 text-sm">{member.stars()}</p>
                </div>
            </div>
        </button>
    }
}
