//! Step validation
//!
//! Per-step predicates that gate forward navigation, and the full check run
//! before submission.

use chrono::NaiveDate;
use thiserror::Error;

use super::state::WizardState;
use super::step::Step;
use crate::catalog::{BookingRequest, ContactFields};

/// Reasons a transition or selection is refused. The message is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a service")]
    ServiceRequired,

    #[error("Please select a staff member")]
    StaffRequired,

    #[error("Please select date and time")]
    DateTimeRequired,

    #[error("Please complete all booking details")]
    Incomplete,

    #[error("{0} is not available for booking")]
    DateUnavailable(NaiveDate),

    #[error("{0} is not an available time")]
    SlotUnavailable(String),

    #[error("This booking has already been confirmed")]
    AlreadyBooked,
}

/// Check the predicate for the state's current step
pub fn validate_current_step(state: &WizardState) -> Result<(), ValidationError> {
    validate_step(state, state.current_step)
}

/// Check whether `step` may be left in the forward direction
pub fn validate_step(state: &WizardState, step: Step) -> Result<(), ValidationError> {
    match step {
        Step::Service if state.service.is_none() => Err(ValidationError::ServiceRequired),
        Step::Staff if state.staff.is_none() => Err(ValidationError::StaffRequired),
        Step::DateTime if state.date.is_none() || state.time.is_none() => {
            Err(ValidationError::DateTimeRequired)
        }
        _ => Ok(()),
    }
}

/// Full-field check run on submit; builds the request when everything is set
pub fn validate_submission(
    state: &WizardState,
    contact: ContactFields,
) -> Result<BookingRequest, ValidationError> {
    match (&state.service, &state.staff, state.date, &state.time) {
        (Some(service_id), Some(staff_id), Some(date), Some(time)) => Ok(BookingRequest {
            service_id: service_id.clone(),
            staff_id: staff_id.clone(),
            date,
            time: time.clone(),
            contact,
        }),
        _ => Err(ValidationError::Incomplete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    #[test]
    fn test_step_predicates() {
        let mut state = WizardState::new();
        assert_eq!(
            validate_step(&state, Step::Service),
            Err(ValidationError::ServiceRequired)
        );
        assert_eq!(
            validate_step(&state, Step::Staff),
            Err(ValidationError::StaffRequired)
        );
        assert_eq!(
            validate_step(&state, Step::DateTime),
            Err(ValidationError::DateTimeRequired)
        );
        assert_eq!(validate_step(&state, Step::Confirm), Ok(()));

        state.date = Some(date());
        assert_eq!(
            validate_step(&state, Step::DateTime),
            Err(ValidationError::DateTimeRequired)
        );
        state.time = Some("11:00".to_string());
        assert_eq!(validate_step(&state, Step::DateTime), Ok(()));
    }

    #[test]
    fn test_submission_requires_every_field() {
        let full = WizardState {
            service: Some("svc-1".into()),
            staff: Some("st-1".into()),
            date: Some(date()),
            time: Some("11:00".to_string()),
            ..WizardState::default()
        };

        let missing = [
            WizardState {
                service: None,
                ..full.clone()
            },
            WizardState {
                staff: None,
                ..full.clone()
            },
            WizardState {
                date: None,
                ..full.clone()
            },
            WizardState {
                time: None,
                ..full.clone()
            },
        ];
        for state in &missing {
            assert_eq!(
                validate_submission(state, ContactFields::new()),
                Err(ValidationError::Incomplete),
                "{state:?}"
            );
        }

        let request = validate_submission(&full, ContactFields::new()).unwrap();
        assert_eq!(request.time, "11:00");
        assert_eq!(request.date, date());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Incomplete.to_string(),
            "Please complete all booking details"
        );
        assert_eq!(
            ValidationError::DateTimeRequired.to_string(),
            "Please select date and time"
        );
        assert_eq!(
            ValidationError::AlreadyBooked.to_string(),
            "This booking has already been confirmed"
        );
    }
}
