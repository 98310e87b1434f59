//! Booking Wizard State
//!
//! The wizard lives in a signal owned by the booking page. Handlers mutate it
//! synchronously and spawn the availability and booking fetches it asks for;
//! slot answers are applied by generation so a late reply never overwrites a
//! newer selection.

use chrono::NaiveDate;
use futures_util::join;
use leptos::*;
use leptos_router::NavigateOptions;
use std::sync::Arc;

use salon_booking::api::BookingApi;
use salon_booking::booking::session::{
    BOOKING_CONFIRMED, BOOKING_FAILED, SERVICES_FAILED, SLOTS_FAILED, STAFF_FAILED,
};
use salon_booking::booking::{BookingWizard, ClosedWeekdays, CompositePolicy, NotBefore, Step};
use salon_booking::catalog::{AvailabilityQuery, ContactFields, Service, ServiceId, StaffId, StaffMember};

use crate::api::GlooClient;
use crate::state::GlobalState;

/// Booking page state
#[derive(Clone, Copy)]
pub struct BookingState {
    pub wizard: RwSignal<BookingWizard>,
    pub services: RwSignal<Vec<Service>>,
    pub staff: RwSignal<Vec<StaffMember>>,
    pub submitting: RwSignal<bool>,
    client: StoredValue<GlooClient>,
    global: GlobalState,
}

/// Date picker rules for the site: weekends closed, nothing before today
fn site_wizard() -> BookingWizard {
    let policy = CompositePolicy::new()
        .with(ClosedWeekdays::weekends())
        .with(NotBefore::today());
    BookingWizard::with_policy(Arc::new(policy))
}

/// Create the booking state for a fresh wizard and provide it to the page
pub fn provide_booking_state() -> BookingState {
    let global = use_context::<GlobalState>().expect("GlobalState not found");

    let state = BookingState {
        wizard: create_rw_signal(site_wizard()),
        services: create_rw_signal(Vec::new()),
        staff: create_rw_signal(Vec::new()),
        submitting: create_rw_signal(false),
        client: store_value(GlooClient::from_storage()),
        global,
    };

    provide_context(state);
    state
}

fn log_error(message: &str, error: &impl std::fmt::Display) {
    web_sys::console::error_1(&format!("{}: {}", message, error).into());
}

impl BookingState {
    pub fn current_step(&self) -> Step {
        self.wizard.with(|w| w.current_step())
    }

    /// Load services and staff; each list fails independently
    pub fn load_catalog(&self) {
        let state = *self;
        spawn_local(async move {
            state.global.loading.set(true);

            let client = state.client.get_value();
            let (services, staff) = join!(client.list_services(), client.list_staff());

            match services {
                Ok(services) => state.services.set(services),
                Err(e) => {
                    log_error(SERVICES_FAILED, &e);
                    state.global.show_error(SERVICES_FAILED);
                }
            }
            match staff {
                Ok(staff) => state.staff.set(staff),
                Err(e) => {
                    log_error(STAFF_FAILED, &e);
                    state.global.show_error(STAFF_FAILED);
                }
            }

            state.global.loading.set(false);
        });
    }

    pub fn select_service(&self, id: ServiceId) {
        let query = self.wizard.try_update(|w| w.select_service(id)).flatten();
        self.fetch_slots(query);
    }

    pub fn select_staff(&self, id: StaffId) {
        let query = self.wizard.try_update(|w| w.select_staff(id)).flatten();
        self.fetch_slots(query);
    }

    pub fn select_date(&self, date: NaiveDate) {
        match self.wizard.try_update(|w| w.select_date(date)) {
            Some(Ok(query)) => self.fetch_slots(query),
            Some(Err(e)) => self.global.show_error(&e.to_string()),
            None => {}
        }
    }

    pub fn select_time(&self, time: &str) {
        if let Some(Err(e)) = self.wizard.try_update(|w| w.select_time(time)) {
            self.global.show_error(&e.to_string());
        }
    }

    fn fetch_slots(&self, query: Option<AvailabilityQuery>) {
        let Some(query) = query else {
            return;
        };

        let state = *self;
        spawn_local(async move {
            let client = state.client.get_value();
            match client.availability(&query).await {
                Ok(slots) => {
                    state.wizard.update(|w| {
                        w.apply_slots(query.generation, slots);
                    });
                }
                Err(e) => {
                    log_error(SLOTS_FAILED, &e);
                    state.wizard.update(|w| w.fail_slots(query.generation));
                    state.global.show_error(SLOTS_FAILED);
                }
            }
        });
    }

    pub fn next_step(&self) {
        if let Some(Err(e)) = self.wizard.try_update(|w| w.next_step()) {
            self.global.show_error(&e.to_string());
        }
    }

    pub fn prev_step(&self) {
        self.wizard.update(|w| {
            w.prev_step();
        });
    }

    /// Validate, submit, and hand off to the confirmation page
    pub fn submit(&self, contact: ContactFields, navigate: impl Fn(&str, NavigateOptions) + 'static) {
        let request = match self.wizard.with(|w| w.prepare_submission(contact)) {
            Ok(request) => request,
            Err(e) => {
                self.global.show_error(&e.to_string());
                return;
            }
        };

        let state = *self;
        spawn_local(async move {
            state.submitting.set(true);
            state.global.loading.set(true);

            let client = state.client.get_value();
            match client.create_booking(&request).await {
                Ok(receipt) => {
                    let confirmation = state.wizard.try_update(|w| w.complete(receipt));
                    state.global.show_success(BOOKING_CONFIRMED);
                    if let Some(confirmation) = confirmation {
                        navigate(&confirmation.path(), NavigateOptions::default());
                    }
                }
                Err(e) => {
                    log_error(BOOKING_FAILED, &e);
                    state.global.show_error(BOOKING_FAILED);
                }
            }

            state.global.loading.set(false);
            state.submitting.set(false);
        });
    }

    /// Display name of the selected service
    pub fn service_name(&self) -> Option<String> {
        let id = self.wizard.with(|w| w.state().service().cloned())?;
        self.services
            .with(|services| services.iter().find(|s| s.id == id).map(|s| s.name.clone()))
    }

    /// Display name of the selected staff member
    pub fn staff_name(&self) -> Option<String> {
        let id = self.wizard.with(|w| w.state().staff().cloned())?;
        self.staff
            .with(|staff| staff.iter().find(|s| s.id == id).map(|s| s.name.clone()))
    }
}
