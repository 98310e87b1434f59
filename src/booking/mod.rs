//! Booking Wizard
//!
//! Four-step appointment flow: service, staff, date/time, confirm.
//!
//! ## Architecture
//!
//! ```text
//! BookingSession (async driver, notices)
//!   └── BookingWizard (navigation gate, slots, generations)
//!         ├── WizardState (current step, selections)
//!         ├── Step (service → staff → date/time → confirm)
//!         ├── validation (per-step predicates)
//!         └── DatePolicy (which days the picker disables)
//! ```
//!
//! The wizard itself is synchronous and owns no I/O, so it can sit behind a
//! reactive signal in the browser or inside a [`BookingSession`] on the host.

pub mod policy;
pub mod session;
pub mod state;
pub mod step;
pub mod validation;
pub mod wizard;

pub use policy::{BlockedDates, ClosedWeekdays, CompositePolicy, DatePolicy, NotBefore};
pub use session::BookingSession;
pub use state::WizardState;
pub use step::{Step, TOTAL_STEPS};
pub use validation::ValidationError;
pub use wizard::BookingWizard;
