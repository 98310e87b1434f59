//! Booking session
//!
//! Drives a [`BookingWizard`] against a [`BookingApi`]: loads the catalog,
//! runs the availability lookups the wizard asks for, submits the booking,
//! and turns every outcome into a notice. Nothing here is fatal; failures
//! are logged and reported so the user can retry the action.

use chrono::NaiveDate;
use futures_util::join;

use super::step::Step;
use super::wizard::BookingWizard;
use crate::api::BookingApi;
use crate::catalog::{
    AvailabilityQuery, Confirmation, ContactFields, Service, ServiceId, StaffId, StaffMember,
};
use crate::notice::NoticeBoard;

pub const SERVICES_FAILED: &str = "Failed to load services";
pub const STAFF_FAILED: &str = "Failed to load staff members";
pub const SLOTS_FAILED: &str = "Failed to load available times";
pub const BOOKING_FAILED: &str = "Failed to complete booking";
pub const BOOKING_CONFIRMED: &str = "Booking confirmed successfully!";

/// One user's booking session
pub struct BookingSession<A> {
    api: A,
    wizard: BookingWizard,
    services: Vec<Service>,
    staff: Vec<StaffMember>,
    notices: NoticeBoard,
    loading: bool,
}

impl<A: BookingApi> BookingSession<A> {
    pub fn new(api: A) -> Self {
        Self::with_wizard(api, BookingWizard::new())
    }

    /// Start from a pre-configured wizard (custom date policy)
    pub fn with_wizard(api: A, wizard: BookingWizard) -> Self {
        Self {
            api,
            wizard,
            services: Vec::new(),
            staff: Vec::new(),
            notices: NoticeBoard::new(),
            loading: false,
        }
    }

    pub fn wizard(&self) -> &BookingWizard {
        &self.wizard
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch services and staff. Each list is loaded independently; one
    /// failing leaves the other in place.
    pub async fn load_catalog(&mut self) {
        self.loading = true;
        let (services, staff) = join!(self.api.list_services(), self.api.list_staff());
        self.loading = false;

        match services {
            Ok(services) => {
                tracing::info!(count = services.len(), "Loaded services");
                self.services = services;
            }
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Failed to load services");
                self.notices.error(SERVICES_FAILED);
            }
        }

        match staff {
            Ok(staff) => {
                tracing::info!(count = staff.len(), "Loaded staff");
                self.staff = staff;
            }
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Failed to load staff members");
                self.notices.error(STAFF_FAILED);
            }
        }
    }

    pub async fn select_service(&mut self, id: impl Into<ServiceId>) {
        let query = self.wizard.select_service(id);
        self.run_availability(query).await;
    }

    pub async fn select_staff(&mut self, id: impl Into<StaffId>) {
        let query = self.wizard.select_staff(id);
        self.run_availability(query).await;
    }

    /// Select a date; an unavailable date produces an error notice and returns false
    pub async fn select_date(&mut self, date: NaiveDate) -> bool {
        match self.wizard.select_date(date) {
            Ok(query) => {
                self.run_availability(query).await;
                true
            }
            Err(e) => {
                self.notices.error(e.to_string());
                false
            }
        }
    }

    pub fn select_time(&mut self, time: &str) -> bool {
        match self.wizard.select_time(time) {
            Ok(()) => true,
            Err(e) => {
                self.notices.error(e.to_string());
                false
            }
        }
    }

    /// Run a lookup the wizard handed out, if any
    pub async fn run_availability(&mut self, query: Option<AvailabilityQuery>) {
        let Some(query) = query else {
            return;
        };

        match self.api.availability(&query).await {
            Ok(slots) => {
                tracing::debug!(count = slots.len(), generation = query.generation, "Loaded time slots");
                self.wizard.apply_slots(query.generation, slots);
            }
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Failed to load time slots");
                self.wizard.fail_slots(query.generation);
                self.notices.error(SLOTS_FAILED);
            }
        }
    }

    /// Advance one step, posting the validation message on failure
    pub fn next_step(&mut self) -> Step {
        if let Err(e) = self.wizard.next_step() {
            self.notices.error(e.to_string());
        }
        self.wizard.current_step()
    }

    pub fn prev_step(&mut self) -> Step {
        self.wizard.prev_step()
    }

    /// Validate and submit the booking.
    ///
    /// Returns the confirmation on success. On any failure the wizard state
    /// is left as it was so the user can retry.
    pub async fn submit(&mut self, contact: ContactFields) -> Option<Confirmation> {
        let request = match self.wizard.prepare_submission(contact) {
            Ok(request) => request,
            Err(e) => {
                self.notices.error(e.to_string());
                return None;
            }
        };

        self.loading = true;
        let result = self.api.create_booking(&request).await;
        self.loading = false;

        match result {
            Ok(receipt) => {
                self.notices.success(BOOKING_CONFIRMED);
                Some(self.wizard.complete(receipt))
            }
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Booking submission failed");
                self.notices.error(BOOKING_FAILED);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::catalog::{BookingReceipt, BookingRequest, TimeSlot};
    use crate::notice::NoticeKind;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// In-memory booking backend recording what it was asked
    #[derive(Default)]
    struct FakeApi {
        fail_services: bool,
        fail_slots: Cell<bool>,
        fail_booking: Cell<bool>,
        availability_calls: Cell<usize>,
        bookings: RefCell<Vec<BookingRequest>>,
    }

    #[async_trait(?Send)]
    impl BookingApi for FakeApi {
        async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
            if self.fail_services {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(vec![Service {
                id: "svc-1".into(),
                name: "Haircut".to_string(),
                duration: 45,
                price: 35.0,
                description: String::new(),
            }])
        }

        async fn list_staff(&self) -> Result<Vec<StaffMember>, ApiError> {
            Ok(vec![StaffMember {
                id: "st-1".into(),
                name: "Maria".to_string(),
                role: "Stylist".to_string(),
                avatar: String::new(),
                rating: 5,
            }])
        }

        async fn availability(&self, _query: &AvailabilityQuery) -> Result<Vec<TimeSlot>, ApiError> {
            self.availability_calls.set(self.availability_calls.get() + 1);
            if self.fail_slots.get() {
                return Err(ApiError::Status {
                    status: 500,
                    message: "unavailable".to_string(),
                });
            }
            Ok(vec![TimeSlot::new("10:00", false), TimeSlot::new("11:00", true)])
        }

        async fn create_booking(&self, request: &BookingRequest) -> Result<BookingReceipt, ApiError> {
            if self.fail_booking.get() {
                return Err(ApiError::Status {
                    status: 409,
                    message: "slot taken".to_string(),
                });
            }
            self.bookings.borrow_mut().push(request.clone());
            Ok(BookingReceipt {
                booking_id: "abc".to_string(),
            })
        }
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    async fn filled_session(api: FakeApi) -> BookingSession<FakeApi> {
        let mut session = BookingSession::new(api);
        session.select_service("svc-1").await;
        session.select_staff("st-1").await;
        assert!(session.select_date(tuesday()).await);
        assert!(session.select_time("11:00"));
        session
    }

    fn contact() -> ContactFields {
        let mut fields = ContactFields::new();
        fields.insert("name".to_string(), "Ada Lovelace".to_string());
        fields.insert("email".to_string(), "ada@example.com".to_string());
        fields
    }

    #[tokio::test]
    async fn test_load_catalog() {
        let mut session = BookingSession::new(FakeApi::default());
        session.load_catalog().await;

        assert_eq!(session.services().len(), 1);
        assert_eq!(session.staff().len(), 1);
        assert!(session.notices().is_empty());
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_failed_services_keep_staff() {
        let api = FakeApi {
            fail_services: true,
            ..FakeApi::default()
        };
        let mut session = BookingSession::new(api);
        session.load_catalog().await;

        assert!(session.services().is_empty());
        assert_eq!(session.staff().len(), 1);
        assert_eq!(
            session.notices().latest(NoticeKind::Error).unwrap().message,
            SERVICES_FAILED
        );
    }

    #[tokio::test]
    async fn test_availability_waits_for_all_inputs() {
        let mut session = BookingSession::new(FakeApi::default());
        session.select_service("svc-1").await;
        session.select_staff("st-1").await;
        assert_eq!(session.api().availability_calls.get(), 0);

        session.select_date(tuesday()).await;
        assert_eq!(session.api().availability_calls.get(), 1);
        assert_eq!(session.wizard().slots().len(), 2);

        // Re-selecting the service refreshes the slots
        session.select_service("svc-1").await;
        assert_eq!(session.api().availability_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_disabled_slot_not_selectable() {
        let mut session = BookingSession::new(FakeApi::default());
        session.select_service("svc-1").await;
        session.select_staff("st-1").await;
        session.select_date(tuesday()).await;

        assert!(!session.select_time("10:00"));
        assert_eq!(session.wizard().state().time(), None);
        assert!(session.select_time("11:00"));
    }

    #[tokio::test]
    async fn test_weekend_date_posts_notice() {
        let mut session = BookingSession::new(FakeApi::default());
        let saturday = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();

        assert!(!session.select_date(saturday).await);
        assert!(session.notices().latest(NoticeKind::Error).is_some());
        assert_eq!(session.wizard().state().date(), None);
    }

    #[tokio::test]
    async fn test_slot_failure_posts_notice() {
        let api = FakeApi::default();
        api.fail_slots.set(true);
        let mut session = BookingSession::new(api);
        session.select_service("svc-1").await;
        session.select_staff("st-1").await;
        session.select_date(tuesday()).await;

        assert!(session.wizard().slots().is_empty());
        assert!(!session.wizard().is_loading_slots());
        assert_eq!(
            session.notices().latest(NoticeKind::Error).unwrap().message,
            SLOTS_FAILED
        );
    }

    #[tokio::test]
    async fn test_next_step_failure_posts_validation_message() {
        let mut session = BookingSession::new(FakeApi::default());
        assert_eq!(session.next_step(), Step::Service);
        assert_eq!(
            session.notices().latest(NoticeKind::Error).unwrap().message,
            "Please select a service"
        );
    }

    #[tokio::test]
    async fn test_submit_incomplete_sends_nothing() {
        let mut session = BookingSession::new(FakeApi::default());
        session.select_service("svc-1").await;
        session.select_staff("st-1").await;

        assert!(session.submit(contact()).await.is_none());
        assert!(session.api().bookings.borrow().is_empty());
        assert_eq!(
            session.notices().latest(NoticeKind::Error).unwrap().message,
            "Please complete all booking details"
        );
    }

    #[tokio::test]
    async fn test_submit_success() {
        let mut session = filled_session(FakeApi::default()).await;
        for _ in 0..3 {
            session.next_step();
        }
        assert_eq!(session.wizard().current_step(), Step::Confirm);

        let confirmation = session.submit(contact()).await.unwrap();
        assert_eq!(confirmation.booking_id, "abc");
        assert!(confirmation.path().contains("abc"));

        let bookings = session.api().bookings.borrow();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].time, "11:00");
        assert_eq!(bookings[0].contact.get("name").unwrap(), "Ada Lovelace");
        drop(bookings);

        assert_eq!(
            session.notices().latest(NoticeKind::Success).unwrap().message,
            BOOKING_CONFIRMED
        );
        assert!(session.wizard().is_finished());
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_state_for_retry() {
        let api = FakeApi::default();
        api.fail_booking.set(true);
        let mut session = filled_session(api).await;
        let before = session.wizard().state().clone();

        assert!(session.submit(contact()).await.is_none());
        assert_eq!(session.wizard().state(), &before);
        assert!(!session.wizard().is_finished());
        assert_eq!(
            session.notices().latest(NoticeKind::Error).unwrap().message,
            BOOKING_FAILED
        );

        // Retry once the server recovers
        session.api().fail_booking.set(false);
        assert!(session.submit(contact()).await.is_some());
    }

    #[tokio::test]
    async fn test_second_submit_sends_nothing() {
        let mut session = filled_session(FakeApi::default()).await;
        assert!(session.submit(contact()).await.is_some());

        assert!(session.submit(contact()).await.is_none());
        assert_eq!(session.api().bookings.borrow().len(), 1);
        assert_eq!(
            session.notices().latest(NoticeKind::Error).unwrap().message,
            "This booking has already been confirmed"
        );
        assert!(!session.is_loading());
    }
}
