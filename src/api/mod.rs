//! Salon API Access
//!
//! The endpoints the booking wizard and dashboard read from and post to,
//! behind traits so the core can be driven by a real HTTP client, the
//! browser's fetch, or an in-memory fake in tests.
//!
//! ## Endpoints
//!
//! - `GET  /api/services`
//! - `GET  /api/staff`
//! - `POST /api/availability`
//! - `POST /api/bookings` (multipart form)
//! - `GET  /api/dashboard/{revenue,appointments,staff-performance,customer-feedback}`

#[cfg(feature = "client")]
mod http;

#[cfg(feature = "client")]
pub use http::{HttpClient, HttpClientConfig};

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{AvailabilityQuery, BookingReceipt, BookingRequest, Service, StaffMember, TimeSlot};
use crate::dashboard::{CustomerFeedback, SeriesData, StaffPerformance};

pub const SERVICES_PATH: &str = "/api/services";
pub const STAFF_PATH: &str = "/api/staff";
pub const AVAILABILITY_PATH: &str = "/api/availability";
pub const BOOKINGS_PATH: &str = "/api/bookings";
pub const REVENUE_PATH: &str = "/api/dashboard/revenue";
pub const APPOINTMENTS_PATH: &str = "/api/dashboard/appointments";
pub const STAFF_PERFORMANCE_PATH: &str = "/api/dashboard/staff-performance";
pub const CUSTOMER_FEEDBACK_PATH: &str = "/api/dashboard/customer-feedback";

/// Join a base URL and an endpoint path without doubling slashes
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Catalog, availability and booking endpoints
///
/// Futures are not required to be `Send` so browser fetches can implement it.
#[async_trait(?Send)]
pub trait BookingApi {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError>;

    async fn list_staff(&self) -> Result<Vec<StaffMember>, ApiError>;

    async fn availability(&self, query: &AvailabilityQuery) -> Result<Vec<TimeSlot>, ApiError>;

    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, ApiError>;
}

/// Dashboard data endpoints
#[async_trait(?Send)]
pub trait DashboardApi {
    async fn revenue(&self) -> Result<SeriesData, ApiError>;

    async fn appointments(&self) -> Result<SeriesData, ApiError>;

    async fn staff_performance(&self) -> Result<Vec<StaffPerformance>, ApiError>;

    async fn customer_feedback(&self) -> Result<Vec<CustomerFeedback>, ApiError>;
}

/// Errors from talking to the salon API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Client setup error: {0}")]
    Client(String),
}

impl ApiError {
    /// Whether trying the same action again could succeed. Nothing retries
    /// automatically; the value is recorded on failure logs.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429,
            ApiError::Decode(_) | ApiError::Client(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint("http://localhost:8080/", SERVICES_PATH),
            "http://localhost:8080/api/services"
        );
        assert_eq!(endpoint("", BOOKINGS_PATH), "/api/bookings");
    }

    #[test]
    fn test_retryable() {
        assert!(ApiError::Network("refused".to_string()).is_retryable());
        assert!(ApiError::Status { status: 503, message: String::new() }.is_retryable());
        assert!(!ApiError::Status { status: 400, message: String::new() }.is_retryable());
        assert!(!ApiError::Decode("eof".to_string()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 409,
            message: "slot taken".to_string(),
        };
        assert_eq!(err.to_string(), "API error 409: slot taken");
    }
}
