//! Date availability policies
//!
//! The date picker asks a [`DatePolicy`] whether each day should be disabled.
//! The weekday rule shipped as the default is a placeholder; real opening
//! hours and holidays plug in as further rules.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Decides whether a calendar date is closed for booking
pub trait DatePolicy: fmt::Debug + Send + Sync {
    /// True if the date must not be selectable
    fn is_unavailable(&self, date: NaiveDate) -> bool;

    fn is_available(&self, date: NaiveDate) -> bool {
        !self.is_unavailable(date)
    }
}

/// Closes fixed days of the week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosedWeekdays {
    days: Vec<Weekday>,
}

impl ClosedWeekdays {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            days: days.into_iter().collect(),
        }
    }

    /// Saturday and Sunday closed
    pub fn weekends() -> Self {
        Self::new([Weekday::Sat, Weekday::Sun])
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }
}

impl Default for ClosedWeekdays {
    fn default() -> Self {
        Self::weekends()
    }
}

impl DatePolicy for ClosedWeekdays {
    fn is_unavailable(&self, date: NaiveDate) -> bool {
        self.days.contains(&date.weekday())
    }
}

/// Closes every date before a cutoff (the picker's "min date")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotBefore(pub NaiveDate);

impl NotBefore {
    /// Cutoff at today's local date
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }
}

impl DatePolicy for NotBefore {
    fn is_unavailable(&self, date: NaiveDate) -> bool {
        date < self.0
    }
}

/// Explicit closed dates, e.g. from an availability feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDates {
    dates: BTreeSet<NaiveDate>,
}

impl BlockedDates {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn block(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl DatePolicy for BlockedDates {
    fn is_unavailable(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// A date is closed if any member rule closes it
#[derive(Debug, Clone, Default)]
pub struct CompositePolicy {
    rules: Vec<Arc<dyn DatePolicy>>,
}

impl CompositePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule
    pub fn with(mut self, rule: impl DatePolicy + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn push(&mut self, rule: Arc<dyn DatePolicy>) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl DatePolicy for CompositePolicy {
    fn is_unavailable(&self, date: NaiveDate) -> bool {
        self.rules.iter().any(|rule| rule.is_unavailable(date))
    }
}

/// Policy used when nothing is configured: weekends closed
pub fn default_policy() -> Arc<dyn DatePolicy> {
    Arc::new(ClosedWeekdays::weekends())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekends_closed() {
        let policy = ClosedWeekdays::weekends();
        // 2024-05-11 is a Saturday
        assert!(policy.is_unavailable(ymd(2024, 5, 11)));
        assert!(policy.is_unavailable(ymd(2024, 5, 12)));
        assert!(policy.is_available(ymd(2024, 5, 13)));
    }

    #[test]
    fn test_not_before() {
        let policy = NotBefore(ymd(2024, 5, 14));
        assert!(policy.is_unavailable(ymd(2024, 5, 13)));
        assert!(policy.is_available(ymd(2024, 5, 14)));
    }

    #[test]
    fn test_composite_any_rule_closes() {
        let policy = CompositePolicy::new()
            .with(ClosedWeekdays::weekends())
            .with(BlockedDates::new([ymd(2024, 5, 15)]));

        assert_eq!(policy.len(), 2);
        assert!(policy.is_unavailable(ymd(2024, 5, 11)));
        assert!(policy.is_unavailable(ymd(2024, 5, 15)));
        assert!(policy.is_available(ymd(2024, 5, 14)));
    }

    #[test]
    fn test_empty_composite_allows_everything() {
        let policy = CompositePolicy::new();
        assert!(policy.is_available(ymd(2024, 5, 11)));
    }
}
