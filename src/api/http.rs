//! Salon REST API Client
//!
//! `reqwest` implementation of [`BookingApi`] and [`DashboardApi`].

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{
    endpoint, ApiError, BookingApi, DashboardApi, APPOINTMENTS_PATH, AVAILABILITY_PATH,
    BOOKINGS_PATH, CUSTOMER_FEEDBACK_PATH, REVENUE_PATH, SERVICES_PATH, STAFF_PATH,
    STAFF_PERFORMANCE_PATH,
};
use crate::catalog::{AvailabilityQuery, BookingReceipt, BookingRequest, Service, StaffMember, TimeSlot};
use crate::dashboard::{CustomerFeedback, SeriesData, StaffPerformance};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the salon site (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

/// Salon REST API client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new client with the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.config.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(map_request_error)?;
        decode(response).await
    }
}

/// Classify a transport-level failure
fn map_request_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("request timed out".to_string())
    } else if e.is_connect() {
        ApiError::Network(format!("connection failed: {}", e))
    } else {
        ApiError::Network(e.to_string())
    }
}

/// Turn a response into `T`, or an error carrying status and body
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Multipart body for a booking submission
fn booking_form(request: &BookingRequest) -> Form {
    request
        .form_fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

#[async_trait(?Send)]
impl BookingApi for HttpClient {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_json(SERVICES_PATH).await
    }

    async fn list_staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.get_json(STAFF_PATH).await
    }

    async fn availability(&self, query: &AvailabilityQuery) -> Result<Vec<TimeSlot>, ApiError> {
        let url = self.url(AVAILABILITY_PATH);
        tracing::debug!(%url, date = %query.date, "POST availability");

        let response = self
            .client
            .post(&url)
            .json(query)
            .send()
            .await
            .map_err(map_request_error)?;
        decode(response).await
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, ApiError> {
        let url = self.url(BOOKINGS_PATH);
        tracing::debug!(%url, service = %request.service_id, staff = %request.staff_id, "POST booking");

        let response = self
            .client
            .post(&url)
            .multipart(booking_form(request))
            .send()
            .await
            .map_err(map_request_error)?;
        decode(response).await
    }
}

#[async_trait(?Send)]
impl DashboardApi for HttpClient {
    async fn revenue(&self) -> Result<SeriesData, ApiError> {
        self.get_json(REVENUE_PATH).await
    }

    async fn appointments(&self) -> Result<SeriesData, ApiError> {
        self.get_json(APPOINTMENTS_PATH).await
    }

    async fn staff_performance(&self) -> Result<Vec<StaffPerformance>, ApiError> {
        self.get_json(STAFF_PERFORMANCE_PATH).await
    }

    async fn customer_feedback(&self) -> Result<Vec<CustomerFeedback>, ApiError> {
        self.get_json(CUSTOMER_FEEDBACK_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_urls() {
        let client = HttpClient::new(HttpClientConfig {
            base_url: "https://salon.example/".to_string(),
            request_timeout_ms: 1000,
        })
        .unwrap();

        assert_eq!(client.url(STAFF_PATH), "https://salon.example/api/staff");
        assert_eq!(
            client.url(CUSTOMER_FEEDBACK_PATH),
            "https://salon.example/api/dashboard/customer-feedback"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Port 9 (discard) on localhost is closed on test machines
        let client = HttpClient::new(HttpClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            request_timeout_ms: 2000,
        })
        .unwrap();

        let err = client.list_services().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.is_retryable());
    }
}
