//! Private-space booking handlers.
//!
//! Bookings are validated and confirmed in-process; nothing is persisted.
//! The confirmation carries a generated id the client can show the user.

use axum::Json;
use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// A bookable session plan.
#[derive(Debug, Serialize)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    /// Price per session, in dollars.
    pub price: Decimal,
    pub hours: u32,
    pub max_guests: u32,
    pub featured: bool,
    /// Short bullet points shown on the pricing card.
    pub features: &'static [&'static str],
    /// Everything included, listed on the confirmation.
    pub full_features: &'static [&'static str],
}

/// The fixed plan table.
fn all_plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "basic",
            name: "Basic",
            price: Decimal::from(29),
            hours: 2,
            max_guests: 5,
            featured: false,
            features: &[
                "2 hours private space",
                "Up to 5 guests",
                "Standard seating",
                "Basic coffee",
                "Free Wi-Fi",
            ],
            full_features: &[
                "2 hours of private space",
                "Standard seating",
                "Basic coffee selection",
                "Free Wi-Fi",
                "Up to 5 guests",
                "Printing services",
                "Writing materials",
            ],
        },
        Plan {
            id: "platinum",
            name: "Platinum",
            price: Decimal::from(59),
            hours: 4,
            max_guests: 10,
            featured: true,
            features: &[
                "4 hours private space",
                "Up to 10 guests",
                "Premium seating",
                "Gourmet coffee & snacks",
                "Projector available",
            ],
            full_features: &[
                "4 hours of private space",
                "Premium seating",
                "Gourmet coffee selection",
                "Complimentary snacks",
                "High-speed Wi-Fi",
                "Up to 10 guests",
                "Projector available",
                "Library access",
                "Office amenities",
            ],
        },
        Plan {
            id: "gold",
            name: "Executive",
            price: Decimal::from(99),
            hours: 8,
            max_guests: 20,
            featured: false,
            features: &[
                "Full day access",
                "Up to 20 guests",
                "Luxury seating",
                "Premium coffee bar",
                "A/V equipment",
            ],
            full_features: &[
                "Full day access (8 hours)",
                "Luxury executive seating",
                "Premium coffee bar",
                "Complimentary breakfast",
                "Dedicated host",
                "Premium Wi-Fi",
                "Up to 20 guests",
                "Audio/Visual equipment",
                "Private entrance",
                "Kids area",
                "Hotel benefits",
            ],
        },
    ]
}

/// `GET /api/booking/plans` - the available session plans.
#[instrument]
pub async fn plans() -> Json<Vec<Plan>> {
    Json(all_plans())
}

/// Booking request body.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub plan: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default)]
    pub special_requests: String,
}

const fn default_guests() -> u32 {
    1
}

/// Booking confirmation returned to the client.
#[derive(Debug, Serialize)]
pub struct BookingConfirmation {
    pub id: Uuid,
    pub plan: String,
    pub plan_name: String,
    pub price: Decimal,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u32,
    pub included_features: Vec<String>,
    pub message: String,
}

/// `POST /api/booking` - book a session.
///
/// Validates the request against the plan table and replies with a
/// confirmation.
#[instrument(skip(request), fields(plan = %request.plan))]
pub async fn create(Json(request): Json<BookingRequest>) -> Result<Json<BookingConfirmation>> {
    let plans = all_plans();
    let plan = plans
        .iter()
        .find(|p| p.id == request.plan)
        .ok_or_else(|| AppError::BadRequest(format!("unknown plan: {}", request.plan)))?;

    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    if !request.email.contains('@') {
        return Err(AppError::BadRequest("invalid email address".to_string()));
    }
    if request.guests == 0 || request.guests > plan.max_guests {
        return Err(AppError::BadRequest(format!(
            "guests must be between 1 and {} for the {} plan",
            plan.max_guests, plan.name
        )));
    }
    if request.date < Utc::now().date_naive() {
        return Err(AppError::BadRequest(
            "booking date must not be in the past".to_string(),
        ));
    }

    let confirmation = BookingConfirmation {
        id: Uuid::new_v4(),
        plan: plan.id.to_string(),
        plan_name: plan.name.to_string(),
        price: plan.price,
        date: request.date,
        time: request.time,
        guests: request.guests,
        included_features: plan.full_features.iter().map(ToString::to_string).collect(),
        message: format!(
            "Booking confirmed: {} plan on {} at {} for {} guest(s)",
            plan.name, request.date, request.time, request.guests
        ),
    };

    tracing::info!(booking_id = %confirmation.id, "Booking confirmed");
    Ok(Json(confirmation))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn plan_table_matches_the_pricing_page() {
        let plans = all_plans();
        assert_eq!(plans.len(), 3);

        let platinum = plans.iter().find(|p| p.id == "platinum").unwrap();
        assert!(platinum.featured);
        assert_eq!(platinum.price, Decimal::from(59));
        assert_eq!(platinum.max_guests, 10);

        let gold = plans.iter().find(|p| p.id == "gold").unwrap();
        assert_eq!(gold.name, "Executive");
        assert_eq!(gold.hours, 8);
    }

    #[test]
    fn booking_request_deserializes() {
        let json = r#"{
            "plan": "basic",
            "name": "Ada",
            "email": "ada@example.com",
            "date": "2030-06-01",
            "time": "14:00:00",
            "guests": 3
        }"#;
        let request: BookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.plan, "basic");
        assert_eq!(request.guests, 3);
        assert_eq!(request.time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
    }
}
