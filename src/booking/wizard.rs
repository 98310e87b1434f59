//! Booking wizard
//!
//! Owns the [`WizardState`], gates navigation on the step predicates and
//! keeps the time slots rendered for the current selection.
//!
//! The wizard never talks to the network. Selections that change the
//! availability inputs hand back an [`AvailabilityQuery`] for the caller to
//! run; the answer comes back through [`BookingWizard::apply_slots`]. Each
//! query carries a generation number, and answers for anything but the
//! latest generation are dropped, so a slow response cannot overwrite the
//! slots of a newer selection.

use chrono::NaiveDate;
use std::sync::Arc;

use super::policy::{default_policy, DatePolicy};
use super::state::WizardState;
use super::step::Step;
use super::validation::{self, ValidationError};
use crate::catalog::{
    AvailabilityQuery, BookingReceipt, BookingRequest, Confirmation, ContactFields, ServiceId,
    StaffId, TimeSlot,
};

/// Step-gated booking flow
#[derive(Debug, Clone)]
pub struct BookingWizard {
    state: WizardState,
    policy: Arc<dyn DatePolicy>,
    slots: Vec<TimeSlot>,
    generation: u64,
    slots_pending: bool,
    confirmation: Option<Confirmation>,
}

impl BookingWizard {
    /// Create a wizard with the default (weekends closed) date policy
    pub fn new() -> Self {
        Self::with_policy(default_policy())
    }

    pub fn with_policy(policy: Arc<dyn DatePolicy>) -> Self {
        Self {
            state: WizardState::new(),
            policy,
            slots: Vec::new(),
            generation: 0,
            slots_pending: false,
            confirmation: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    pub fn policy(&self) -> &dyn DatePolicy {
        self.policy.as_ref()
    }

    /// Slots currently rendered for the date/time step
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// True while an availability lookup for the latest selection is outstanding
    pub fn is_loading_slots(&self) -> bool {
        self.slots_pending
    }

    /// Set once the booking has been accepted by the server
    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.confirmation.is_some()
    }

    /// Whether the date picker should offer `date`
    pub fn is_date_selectable(&self, date: NaiveDate) -> bool {
        self.policy.is_available(date)
    }

    /// Whether a time button is enabled in the rendered slot list
    pub fn is_time_selectable(&self, time: &str) -> bool {
        self.slots.iter().any(|slot| slot.time == time && slot.available)
    }

    /// Select a service, replacing any earlier choice
    pub fn select_service(&mut self, id: impl Into<ServiceId>) -> Option<AvailabilityQuery> {
        let id = id.into();
        tracing::debug!(service = %id, "Service selected");
        self.state.service = Some(id);
        self.availability_query()
    }

    /// Select a staff member, replacing any earlier choice
    pub fn select_staff(&mut self, id: impl Into<StaffId>) -> Option<AvailabilityQuery> {
        let id = id.into();
        tracing::debug!(staff = %id, "Staff member selected");
        self.state.staff = Some(id);
        self.availability_query()
    }

    /// Select a date. Dates closed by the policy are refused and leave the
    /// previous selection in place.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
    ) -> Result<Option<AvailabilityQuery>, ValidationError> {
        if self.policy.is_unavailable(date) {
            tracing::warn!(%date, "Rejected unavailable date");
            return Err(ValidationError::DateUnavailable(date));
        }
        tracing::debug!(%date, "Date selected");
        self.state.date = Some(date);
        Ok(self.availability_query())
    }

    /// Select a time from the rendered slots. Disabled or unknown slots are refused.
    pub fn select_time(&mut self, time: &str) -> Result<(), ValidationError> {
        if !self.is_time_selectable(time) {
            tracing::warn!(time, "Rejected unavailable time slot");
            return Err(ValidationError::SlotUnavailable(time.to_string()));
        }
        tracing::debug!(time, "Time selected");
        self.state.time = Some(time.to_string());
        Ok(())
    }

    /// Build the availability lookup for the current selection, if service,
    /// staff and date are all chosen. Each call starts a new generation.
    pub fn availability_query(&mut self) -> Option<AvailabilityQuery> {
        let (service_id, staff_id, date) = match (&self.state.service, &self.state.staff, self.state.date) {
            (Some(service), Some(staff), Some(date)) => (service.clone(), staff.clone(), date),
            _ => return None,
        };

        self.generation += 1;
        self.slots_pending = true;

        Some(AvailabilityQuery {
            date,
            service_id,
            staff_id,
            generation: self.generation,
        })
    }

    /// Install slots returned for a query. Returns false, leaving the
    /// rendered slots untouched, when the answer belongs to a superseded query.
    ///
    /// A selected time that is not an available slot in the new list is cleared.
    pub fn apply_slots(&mut self, generation: u64, slots: Vec<TimeSlot>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "Dropping stale availability response"
            );
            return false;
        }
        self.slots = slots;
        self.slots_pending = false;

        if let Some(time) = self.state.time.as_deref() {
            if !self.is_time_selectable(time) {
                tracing::debug!(time, "Selected time no longer available");
                self.state.time = None;
            }
        }
        true
    }

    /// Record that the lookup for `generation` failed. Rendered slots stay as they were.
    pub fn fail_slots(&mut self, generation: u64) {
        if generation == self.generation {
            self.slots_pending = false;
        }
    }

    /// Advance one step if the current step's predicate holds.
    ///
    /// On the last step this is a no-op that still succeeds; leaving the
    /// last step happens through submission.
    pub fn next_step(&mut self) -> Result<Step, ValidationError> {
        if let Err(e) = validation::validate_current_step(&self.state) {
            tracing::warn!(step = self.state.current_step.number(), error = %e, "Step validation failed");
            return Err(e);
        }

        if let Some(next) = self.state.current_step.next() {
            tracing::debug!(from = self.state.current_step.number(), to = next.number(), "Advancing step");
            self.state.current_step = next;
        }
        Ok(self.state.current_step)
    }

    /// Go back one step; no-op on the first step
    pub fn prev_step(&mut self) -> Step {
        if let Some(previous) = self.state.current_step.previous() {
            tracing::debug!(from = self.state.current_step.number(), to = previous.number(), "Going back");
            self.state.current_step = previous;
        }
        self.state.current_step
    }

    /// Full-field check before submission. Does not change any state.
    ///
    /// Refused once a booking has been confirmed.
    pub fn prepare_submission(
        &self,
        contact: ContactFields,
    ) -> Result<BookingRequest, ValidationError> {
        if let Some(confirmation) = &self.confirmation {
            tracing::warn!(booking_id = %confirmation.booking_id, "Booking already confirmed");
            return Err(ValidationError::AlreadyBooked);
        }
        validation::validate_submission(&self.state, contact).map_err(|e| {
            tracing::warn!(error = %e, "Submission validation failed");
            e
        })
    }

    /// Record the server's acceptance and produce the confirmation hand-off
    pub fn complete(&mut self, receipt: BookingReceipt) -> Confirmation {
        let confirmation = Confirmation::from(receipt);
        tracing::info!(booking_id = %confirmation.booking_id, "Booking confirmed");
        self.confirmation = Some(confirmation.clone());
        confirmation
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}
