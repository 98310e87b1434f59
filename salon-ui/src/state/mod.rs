//! State Management
//!
//! Site-wide signals and the booking wizard state.

pub mod booking;
pub mod global;

pub use booking::{provide_booking_state, BookingState};
pub use global::{provide_global_state, GlobalState};
