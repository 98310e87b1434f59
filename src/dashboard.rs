//! Salon Dashboard
//!
//! Revenue and appointment series, staff performance and customer feedback
//! panels, refreshed together from the dashboard endpoints.
//!
//! ## Refresh semantics
//!
//! All four panels are fetched concurrently. A panel whose fetch fails is
//! logged and keeps whatever it showed before; the others still update.

use futures_util::join;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, DashboardApi};
use crate::catalog::star_rating;
use crate::notice::NoticeKind;

/// Default auto-refresh interval (5 minutes)
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 300_000;

/// Labelled series for a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl SeriesData {
    /// Label/value pairs; extra labels or values without a partner are ignored
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .zip(self.values.iter())
            .map(|(label, value)| (label.as_str(), *value))
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.values.is_empty()
    }
}

/// Performance card for one staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffPerformance {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    /// Percentage, 0-100
    pub performance: f64,
}

impl StaffPerformance {
    /// Performance clamped to a valid bar width
    pub fn bar_width(&self) -> f64 {
        self.performance.clamp(0.0, 100.0)
    }
}

/// A customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerFeedback {
    pub rating: u8,
    pub date: String,
    pub comment: String,
    pub customer: String,
}

impl CustomerFeedback {
    pub fn stars(&self) -> String {
        star_rating(self.rating)
    }
}

/// Dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Revenue,
    Appointments,
    StaffPerformance,
    CustomerFeedback,
}

impl Panel {
    pub const ALL: [Panel; 4] = [
        Panel::Revenue,
        Panel::Appointments,
        Panel::StaffPerformance,
        Panel::CustomerFeedback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Revenue => "revenue data",
            Panel::Appointments => "appointments data",
            Panel::StaffPerformance => "staff performance",
            Panel::CustomerFeedback => "customer feedback",
        }
    }
}

/// Outcome of one refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub failed: Vec<Panel>,
}

impl RefreshReport {
    pub fn is_complete_failure(&self) -> bool {
        self.failed.len() == Panel::ALL.len()
    }

    pub fn updated(&self) -> usize {
        Panel::ALL.len() - self.failed.len()
    }

    /// Notice to show for this refresh. Automatic refreshes stay quiet unless
    /// nothing could be loaded.
    pub fn notice(&self, manual: bool) -> Option<(NoticeKind, &'static str)> {
        if self.is_complete_failure() {
            Some((NoticeKind::Error, "Failed to load dashboard data"))
        } else if manual {
            Some((NoticeKind::Success, "Dashboard data updated successfully"))
        } else {
            None
        }
    }
}

/// Raw answers from one round of panel fetches, not yet merged.
///
/// Fetching without holding the panel data lets a front end merge the
/// results into whatever the data is when they arrive.
#[derive(Debug)]
pub struct PanelResults {
    pub revenue: Result<SeriesData, ApiError>,
    pub appointments: Result<SeriesData, ApiError>,
    pub staff_performance: Result<Vec<StaffPerformance>, ApiError>,
    pub customer_feedback: Result<Vec<CustomerFeedback>, ApiError>,
}

impl PanelResults {
    /// Fetch all four panels concurrently
    pub async fn fetch<A: DashboardApi + ?Sized>(api: &A) -> Self {
        let (revenue, appointments, staff_performance, customer_feedback) = join!(
            api.revenue(),
            api.appointments(),
            api.staff_performance(),
            api.customer_feedback()
        );
        Self {
            revenue,
            appointments,
            staff_performance,
            customer_feedback,
        }
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub revenue: Option<SeriesData>,
    pub appointments: Option<SeriesData>,
    pub staff_performance: Vec<StaffPerformance>,
    pub customer_feedback: Vec<CustomerFeedback>,
}

impl DashboardData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch all panels concurrently and merge the results
    pub async fn refresh<A: DashboardApi + ?Sized>(&mut self, api: &A) -> RefreshReport {
        let fetched = PanelResults::fetch(api).await;
        self.apply(fetched)
    }

    /// Merge one round of fetches. Panels whose fetch failed keep their
    /// current contents.
    pub fn apply(&mut self, fetched: PanelResults) -> RefreshReport {
        let mut report = RefreshReport::default();

        match fetched.revenue {
            Ok(data) => self.revenue = Some(data),
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Failed to fetch revenue data");
                report.failed.push(Panel::Revenue);
            }
        }
        match fetched.appointments {
            Ok(data) => self.appointments = Some(data),
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Failed to fetch appointments data");
                report.failed.push(Panel::Appointments);
            }
        }
        match fetched.staff_performance {
            Ok(data) => self.staff_performance = data,
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Failed to fetch staff performance");
                report.failed.push(Panel::StaffPerformance);
            }
        }
        match fetched.customer_feedback {
            Ok(data) => self.customer_feedback = data,
            Err(e) => {
                tracing::error!(error = %e, retryable = e.is_retryable(), "Failed to fetch customer feedback");
                report.failed.push(Panel::CustomerFeedback);
            }
        }

        tracing::info!(updated = report.updated(), failed = report.failed.len(), "Dashboard refreshed");
        report
    }

    /// Mean customer rating, if there is any feedback
    pub fn average_rating(&self) -> Option<f64> {
        if self.customer_feedback.is_empty() {
            return None;
        }
        let sum: u32 = self.customer_feedback.iter().map(|f| u32::from(f.rating)).sum();
        Some(sum as f64 / self.customer_feedback.len() as f64)
    }
}

/// Search box and filter dropdown state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
    search: String,
    min_rating: Option<u8>,
}

impl DashboardFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term; matching is case-insensitive
    pub fn search(mut self, term: &str) -> Self {
        self.set_search(term);
        self
    }

    pub fn min_rating(mut self, rating: u8) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_lowercase();
    }

    /// Apply a filter dropdown value: "all" (or empty) clears, a number sets the minimum rating
    pub fn set_rating_filter(&mut self, value: &str) {
        self.min_rating = value.trim().trim_end_matches('+').parse().ok();
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn rating_threshold(&self) -> Option<u8> {
        self.min_rating
    }

    fn matches_text(&self, fields: &[&str]) -> bool {
        self.search.is_empty()
            || fields
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search))
    }

    pub fn staff<'a>(&self, staff: &'a [StaffPerformance]) -> Vec<&'a StaffPerformance> {
        staff
            .iter()
            .filter(|s| self.matches_text(&[s.name.as_str(), s.role.as_str()]))
            .collect()
    }

    pub fn feedback<'a>(&self, feedback: &'a [CustomerFeedback]) -> Vec<&'a CustomerFeedback> {
        feedback
            .iter()
            .filter(|f| self.min_rating.map_or(true, |min| f.rating >= min))
            .filter(|f| self.matches_text(&[f.comment.as_str(), f.customer.as_str()]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::Cell;

    fn staff() -> Vec<StaffPerformance> {
        vec![
            StaffPerformance {
                name: "Maria Lopez".to_string(),
                role: "Senior Stylist".to_string(),
                avatar: String::new(),
                performance: 92.0,
            },
            StaffPerformance {
                name: "Tom Reed".to_string(),
                role: "Colorist".to_string(),
                avatar: String::new(),
                performance: 78.5,
            },
        ]
    }

    fn feedback() -> Vec<CustomerFeedback> {
        vec![
            CustomerFeedback {
                rating: 5,
                date: "2024-05-01".to_string(),
                comment: "Loved the new color".to_string(),
                customer: "Jane".to_string(),
            },
            CustomerFeedback {
                rating: 3,
                date: "2024-05-02".to_string(),
                comment: "Waited a while".to_string(),
                customer: "Sam".to_string(),
            },
        ]
    }

    /// Fake dashboard backend; `fail_staff` toggles the staff endpoint
    struct FakeDashboard {
        fail_all: bool,
        fail_staff: Cell<bool>,
    }

    #[async_trait(?Send)]
    impl DashboardApi for FakeDashboard {
        async fn revenue(&self) -> Result<SeriesData, ApiError> {
            if self.fail_all {
                return Err(ApiError::Network("down".to_string()));
            }
            Ok(SeriesData {
                labels: vec!["Mon".to_string(), "Tue".to_string()],
                values: vec![120.0, 80.0],
            })
        }

        async fn appointments(&self) -> Result<SeriesData, ApiError> {
            if self.fail_all {
                return Err(ApiError::Network("down".to_string()));
            }
            Ok(SeriesData {
                labels: vec!["Mon".to_string()],
                values: vec![6.0],
            })
        }

        async fn staff_performance(&self) -> Result<Vec<StaffPerformance>, ApiError> {
            if self.fail_all || self.fail_staff.get() {
                return Err(ApiError::Status {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(staff())
        }

        async fn customer_feedback(&self) -> Result<Vec<CustomerFeedback>, ApiError> {
            if self.fail_all {
                return Err(ApiError::Network("down".to_string()));
            }
            Ok(feedback())
        }
    }

    #[tokio::test]
    async fn test_refresh_populates_all_panels() {
        let api = FakeDashboard {
            fail_all: false,
            fail_staff: Cell::new(false),
        };
        let mut data = DashboardData::new();
        let report = data.refresh(&api).await;

        assert!(report.failed.is_empty());
        assert_eq!(data.revenue.as_ref().unwrap().total(), 200.0);
        assert_eq!(data.staff_performance.len(), 2);
        assert_eq!(data.average_rating(), Some(4.0));
        assert_eq!(
            report.notice(true),
            Some((NoticeKind::Success, "Dashboard data updated successfully"))
        );
        assert_eq!(report.notice(false), None);
    }

    #[tokio::test]
    async fn test_failed_panel_keeps_previous_data() {
        let api = FakeDashboard {
            fail_all: false,
            fail_staff: Cell::new(false),
        };
        let mut data = DashboardData::new();
        data.refresh(&api).await;

        api.fail_staff.set(true);
        let report = data.refresh(&api).await;

        assert_eq!(report.failed, vec![Panel::StaffPerformance]);
        assert_eq!(data.staff_performance, staff());
        assert!(!report.is_complete_failure());
    }

    #[tokio::test]
    async fn test_apply_merges_into_current_data() {
        let api = FakeDashboard {
            fail_all: false,
            fail_staff: Cell::new(true),
        };
        let fetched = PanelResults::fetch(&api).await;

        // Another refresh lands while this one is in flight
        let mut data = DashboardData::new();
        let newer = vec![StaffPerformance {
            name: "Ana Ruiz".to_string(),
            role: "Barber".to_string(),
            avatar: String::new(),
            performance: 88.0,
        }];
        data.staff_performance = newer.clone();

        let report = data.apply(fetched);
        assert_eq!(report.failed, vec![Panel::StaffPerformance]);
        assert_eq!(data.staff_performance, newer);
        assert_eq!(data.customer_feedback, feedback());
        assert!(data.revenue.is_some());
    }

    #[tokio::test]
    async fn test_total_failure_notice() {
        let api = FakeDashboard {
            fail_all: true,
            fail_staff: Cell::new(false),
        };
        let mut data = DashboardData::new();
        let report = data.refresh(&api).await;

        assert!(report.is_complete_failure());
        assert_eq!(
            report.notice(false),
            Some((NoticeKind::Error, "Failed to load dashboard data"))
        );
        assert_eq!(data, DashboardData::default());
    }

    #[test]
    fn test_search_filter() {
        let staff = staff();
        let filter = DashboardFilter::new().search("  COLOR ");
        let found = filter.staff(&staff);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Tom Reed");

        let feedback = feedback();
        let found = filter.feedback(&feedback);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer, "Jane");
    }

    #[test]
    fn test_rating_filter() {
        let feedback = feedback();
        let mut filter = DashboardFilter::new();
        filter.set_rating_filter("4+");
        assert_eq!(filter.rating_threshold(), Some(4));
        assert_eq!(filter.feedback(&feedback).len(), 1);

        filter.set_rating_filter("all");
        assert_eq!(filter.rating_threshold(), None);
        assert_eq!(filter.feedback(&feedback).len(), 2);
    }

    #[test]
    fn test_series_helpers() {
        let series = SeriesData {
            labels: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            values: vec![1.0, 4.0],
        };
        assert_eq!(series.points().count(), 2);
        assert_eq!(series.max(), Some(4.0));
        assert!(!series.is_empty());
    }

    #[test]
    fn test_bar_width_clamped() {
        let mut card = staff().remove(0);
        card.performance = 140.0;
        assert_eq!(card.bar_width(), 100.0);
    }
}
