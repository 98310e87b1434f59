//! # Salon Booking
//!
//! Booking wizard core, API clients and dashboard loaders for a salon
//! appointment website.
//!
//! ## Modules
//!
//! - [`booking`]: four-step booking wizard and its async session driver
//! - [`catalog`]: services, staff, time slots and booking wire models
//! - [`api`]: endpoint traits, errors and the `reqwest` client
//! - [`dashboard`]: revenue/appointment charts, staff and feedback panels
//! - [`nav`]: header navigation behaviour
//! - [`notice`]: transient success/error notices
//!
//! The `client` feature (on by default) adds the HTTP client, configuration
//! loading, logging setup and the `salon` CLI. The browser front end builds
//! with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use salon_booking::api::{HttpClient, HttpClientConfig};
//! use salon_booking::booking::BookingSession;
//! use salon_booking::catalog::ContactFields;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(HttpClientConfig::default())?;
//!     let mut session = BookingSession::new(client);
//!     session.load_catalog().await;
//!
//!     session.select_service("svc-1").await;
//!     session.next_step();
//!     session.select_staff("st-1").await;
//!     session.next_step();
//!     session.select_date(chrono::NaiveDate::from_ymd_opt(2030, 6, 4).unwrap()).await;
//!     session.select_time("11:00");
//!     session.next_step();
//!
//!     if let Some(confirmation) = session.submit(ContactFields::new()).await {
//!         println!("Booked: {}", confirmation.path());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod booking;
pub mod catalog;
pub mod dashboard;
pub mod nav;
pub mod notice;

#[cfg(feature = "client")]
pub mod config;
#[cfg(feature = "client")]
pub mod logging;

pub use api::{ApiError, BookingApi, DashboardApi};
pub use booking::{BookingSession, BookingWizard, DatePolicy, Step, ValidationError, WizardState};
pub use catalog::{
    AvailabilityQuery, BookingReceipt, BookingRequest, Confirmation, ContactFields, Service,
    ServiceId, StaffId, StaffMember, TimeSlot,
};
pub use dashboard::{
    CustomerFeedback, DashboardData, DashboardFilter, PanelResults, SeriesData, StaffPerformance,
};
pub use notice::{Notice, NoticeBoard, NoticeKind};

#[cfg(feature = "client")]
pub use api::{HttpClient, HttpClientConfig};

#[cfg(feature = "client")]
pub use config::{Config, ConfigError, LoggingConfig};
