//! Booking wizard state
//!
//! Current step and the four booking selections.

use chrono::NaiveDate;

use super::step::Step;
use crate::catalog::{ServiceId, StaffId};

/// In-progress booking: where the user is and what they picked so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    pub(crate) current_step: Step,
    pub(crate) service: Option<ServiceId>,
    pub(crate) staff: Option<StaffId>,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) time: Option<String>,
}

impl WizardState {
    /// Fresh state on step 1 with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn service(&self) -> Option<&ServiceId> {
        self.service.as_ref()
    }

    pub fn staff(&self) -> Option<&StaffId> {
        self.staff.as_ref()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// True once all four selections are present
    pub fn is_complete(&self) -> bool {
        self.service.is_some() && self.staff.is_some() && self.date.is_some() && self.time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), Step::Service);
        assert_eq!(state.service(), None);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_partial_state_incomplete() {
        let state = WizardState {
            service: Some("svc-1".into()),
            date: NaiveDate::from_ymd_opt(2024, 5, 14),
            ..WizardState::default()
        };
        assert_eq!(state.date(), NaiveDate::from_ymd_opt(2024, 5, 14));
        assert!(!state.is_complete());
    }
}
