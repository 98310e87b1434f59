//! Catalog and Booking Wire Models
//!
//! Types exchanged with the booking endpoints. Field names follow the
//! camelCase JSON the site's API speaks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Highest rating shown as stars
pub const MAX_RATING: u8 = 5;

/// Identifier of a bookable service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub String);

/// Identifier of a staff member
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(pub String);

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StaffId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StaffId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A service offered by the salon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// Length of the appointment in minutes
    pub duration: u32,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Service {
    /// Price formatted for display, e.g. `$45`
    pub fn price_label(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${:.2}", self.price)
        }
    }
}

/// A bookable staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub rating: u8,
}

impl StaffMember {
    pub fn stars(&self) -> String {
        star_rating(self.rating)
    }
}

/// Render a 0-5 rating as filled and empty stars. Out-of-range ratings are clamped.
pub fn star_rating(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// A time slot returned by the availability lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(time: impl Into<String>, available: bool) -> Self {
        Self {
            time: time.into(),
            available,
        }
    }
}

/// Availability lookup for a date, service and staff member.
///
/// `generation` identifies which wizard selection produced the query; it is
/// never sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub service_id: ServiceId,
    pub staff_id: StaffId,
    #[serde(skip)]
    pub generation: u64,
}

/// Extra user-entered form fields sent with a booking (name, email, notes...)
pub type ContactFields = BTreeMap<String, String>;

/// A complete booking ready to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub service_id: ServiceId,
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub time: String,
    pub contact: ContactFields,
}

impl BookingRequest {
    /// Form fields in submission order: user-entered fields first, then the
    /// four booking selections.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = self
            .contact
            .iter()
            .filter(|(key, _)| !RESERVED_FIELDS.contains(&key.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        fields.push(("serviceId".to_string(), self.service_id.0.clone()));
        fields.push(("staffId".to_string(), self.staff_id.0.clone()));
        fields.push(("date".to_string(), self.date.format("%Y-%m-%d").to_string()));
        fields.push(("time".to_string(), self.time.clone()));
        fields
    }
}

/// Field names owned by the wizard selections; contact fields cannot override them
const RESERVED_FIELDS: [&str; 4] = ["serviceId", "staffId", "date", "time"];

/// Server acknowledgement of a created booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingReceipt {
    pub booking_id: String,
}

/// Hand-off to the confirmation view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub booking_id: String,
}

impl Confirmation {
    /// Route of the confirmation page for this booking
    pub fn path(&self) -> String {
        format!("/booking-confirmation/{}", self.booking_id)
    }
}

impl From<BookingReceipt> for Confirmation {
    fn from(receipt: BookingReceipt) -> Self {
        Self {
            booking_id: receipt.booking_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rating() {
        assert_eq!(star_rating(3), "★★★☆☆");
        assert_eq!(star_rating(0), "☆☆☆☆☆");
        assert_eq!(star_rating(9), "★★★★★");
    }

    #[test]
    fn test_service_deserialize() {
        let json = r#"{"id":"svc-1","name":"Haircut","duration":45,"price":35,"description":"Wash and cut"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.id, ServiceId::from("svc-1"));
        assert_eq!(service.duration, 45);
        assert_eq!(service.price_label(), "$35");
    }

    #[test]
    fn test_availability_query_wire_format() {
        let query = AvailabilityQuery {
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            service_id: "svc-1".into(),
            staff_id: "st-2".into(),
            generation: 7,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"date": "2024-05-14", "serviceId": "svc-1", "staffId": "st-2"})
        );
    }

    #[test]
    fn test_form_fields_keep_selections_authoritative() {
        let mut contact = ContactFields::new();
        contact.insert("name".to_string(), "Ada".to_string());
        contact.insert("time".to_string(), "23:59".to_string());

        let request = BookingRequest {
            service_id: "svc-1".into(),
            staff_id: "st-1".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            time: "11:00".to_string(),
            contact,
        };

        let fields = request.form_fields();
        assert_eq!(fields[0], ("name".to_string(), "Ada".to_string()));
        assert!(fields.contains(&("time".to_string(), "11:00".to_string())));
        assert!(!fields.contains(&("time".to_string(), "23:59".to_string())));
        assert!(fields.contains(&("date".to_string(), "2024-05-14".to_string())));
    }

    #[test]
    fn test_receipt_to_confirmation() {
        let receipt: BookingReceipt = serde_json::from_str(r#"{"bookingId":"abc"}"#).unwrap();
        let confirmation = Confirmation::from(receipt);
        assert_eq!(confirmation.path(), "/booking-confirmation/abc");
    }
}
