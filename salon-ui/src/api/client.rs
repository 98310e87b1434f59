//! HTTP API Client
//!
//! `gloo-net` implementation of the salon booking and dashboard endpoints.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::FormData;

use salon_booking::api::{
    endpoint, ApiError, BookingApi, DashboardApi, APPOINTMENTS_PATH, AVAILABILITY_PATH,
    BOOKINGS_PATH, CUSTOMER_FEEDBACK_PATH, REVENUE_PATH, SERVICES_PATH, STAFF_PATH,
    STAFF_PERFORMANCE_PATH,
};
use salon_booking::catalog::{
    AvailabilityQuery, BookingReceipt, BookingRequest, Service, StaffMember, TimeSlot,
};
use salon_booking::dashboard::{CustomerFeedback, SeriesData, StaffPerformance};

/// Local storage key for an API base override
const API_URL_KEY: &str = "salon_api_url";

/// Get the API base URL from local storage, falling back to the page origin
pub fn get_api_base() -> String {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return String::new(),
    };

    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    let url = match stored {
        Some(url) => url,
        None => window.location().origin().unwrap_or_default(),
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Salon API over the browser's fetch
#[derive(Debug, Clone)]
pub struct GlooClient {
    base_url: String,
}

impl GlooClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the configured (or same-origin) API
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            message,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Multipart body for a booking submission
fn booking_form(request: &BookingRequest) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Client(format!("{:?}", e)))?;
    for (name, value) in request.form_fields() {
        form.append_with_str(&name, &value)
            .map_err(|e| ApiError::Client(format!("{:?}", e)))?;
    }
    Ok(form)
}

#[async_trait(?Send)]
impl BookingApi for GlooClient {
    async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get_json(SERVICES_PATH).await
    }

    async fn list_staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.get_json(STAFF_PATH).await
    }

    async fn availability(&self, query: &AvailabilityQuery) -> Result<Vec<TimeSlot>, ApiError> {
        let response = Request::post(&self.url(AVAILABILITY_PATH))
            .json(query)
            .map_err(|e| ApiError::Client(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, ApiError> {
        let form = booking_form(request)?;
        let response = Request::post(&self.url(BOOKINGS_PATH))
            .body(form)
            .map_err(|e| ApiError::Client(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

#[async_trait(?Send)]
impl DashboardApi for GlooClient {
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
    fn test_urls() {
        let client = GlooClient::new("https://salon.example/");
        assert_eq!(client.url(SERVICES_PATH), "https://salon.example/api/services");

        let same_origin = GlooClient::new("");
        assert_eq!(same_origin.url(BOOKINGS_PATH), "/api/bookings");
    }
}
