//! UI Components
//!
//! Reusable Leptos components for the booking wizard and dashboard.

pub mod cards;
pub mod chart;
pub mod date_picker;
pub mod loading;
pub mod nav;
pub mod progress;
pub mod time_slots;
pub mod toast;

pub use cards::{ServiceCard, StaffCard};
pub use chart::{Chart, ChartKind};
pub use date_picker::DatePicker;
pub use loading::{CardSkeleton, ChartSkeleton, InlineLoading, LoadingOverlay};
pub use nav::Nav;
pub use progress::StepProgress;
pub use time_slots::TimeSlots;
pub use toast::Toast;
