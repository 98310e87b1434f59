//! Pages
//!
//! Top-level page components for each route.

pub mod booking;
pub mod confirmation;
pub mod dashboard;
pub mod home;

pub use booking::Booking;
pub use confirmation::Confirmation;
pub use dashboard::Dashboard;
pub use home::Home;
