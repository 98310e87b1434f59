//! Booking step definitions
//!
//! The four stages of the booking flow, in order.

use std::fmt;

/// Number of steps in the booking flow
pub const TOTAL_STEPS: usize = 4;

/// Booking step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    /// Choose a service
    #[default]
    Service,

    /// Choose a staff member
    Staff,

    /// Choose a date and an available time slot
    DateTime,

    /// Review, enter contact details and submit
    Confirm,
}

impl Step {
    /// Get step title
    pub fn title(&self) -> &'static str {
        match self {
            Step::Service => "Choose a Service",
            Step::Staff => "Choose Your Stylist",
            Step::DateTime => "Pick a Date & Time",
            Step::Confirm => "Confirm Booking",
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            Step::Service => 1,
            Step::Staff => 2,
            Step::DateTime => 3,
            Step::Confirm => 4,
        }
    }

    /// Step for a 1-indexed number, `None` outside `1..=4`
    pub fn from_number(number: usize) -> Option<Step> {
        match number {
            1 => Some(Step::Service),
            2 => Some(Step::Staff),
            3 => Some(Step::DateTime),
            4 => Some(Step::Confirm),
            _ => None,
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Step::Service)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Step::Confirm)
    }

    /// Get next step
    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    /// Get previous step
    pub fn previous(&self) -> Option<Step> {
        Step::from_number(self.number() - 1)
    }

    /// Width of the progress bar in percent: 0 on the first step, 100 on the last
    pub fn progress_percent(&self) -> f64 {
        (self.number() - 1) as f64 / (TOTAL_STEPS - 1) as f64 * 100.0
    }

    /// Get all steps in order
    pub fn all() -> [Step; TOTAL_STEPS] {
        [Step::Service, Step::Staff, Step::DateTime, Step::Confirm]
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert!(Step::Service.is_first());
        assert_eq!(Step::Service.next(), Some(Step::Staff));
        assert_eq!(Step::Service.previous(), None);
        assert!(Step::Confirm.is_last());
        assert_eq!(Step::Confirm.next(), None);
        assert_eq!(Step::Confirm.previous(), Some(Step::DateTime));
    }

    #[test]
    fn test_step_numbers() {
        for (idx, step) in Step::all().iter().enumerate() {
            assert_eq!(step.number(), idx + 1);
            assert_eq!(Step::from_number(idx + 1), Some(*step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(5), None);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(Step::Service.progress_percent(), 0.0);
        assert_eq!(Step::Confirm.progress_percent(), 100.0);
        let mid = Step::Staff.progress_percent();
        assert!(mid > 33.0 && mid < 34.0);
    }
}
