//! Upstream flight record model and query parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction attribute of an upstream flight record.
///
/// The upstream API encodes direction as a single letter; only departures
/// are reservable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightDirection {
    #[serde(rename = "D")]
    Departure,
    #[serde(rename = "A")]
    Arrival,
}

/// A flight record as returned by the upstream API.
///
/// Typed on the three fields the reservation workflow inspects. All remaining
/// upstream fields are retained in `extra` so the record round-trips unchanged
/// through the passthrough read endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Display name of the flight, cached locally on first reservation.
    pub flight_name: String,
    /// Scheduled date of the flight (`yyyy-mm-dd`).
    pub schedule_date: NaiveDate,
    /// Whether the flight departs from or arrives at the hub.
    pub flight_direction: FlightDirection,
    /// Remaining upstream fields, forwarded as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Optional filters for the upstream flight list query.
#[derive(Debug, Clone, Default)]
pub struct FlightsQuery {
    pub schedule_date: Option<String>,
    pub flight_direction: Option<String>,
    pub airline: Option<String>,
    pub page: Option<u32>,
}

impl FlightsQuery {
    /// Builds the upstream query string pairs.
    ///
    /// Absent filters are omitted entirely, and `page` is also omitted at its
    /// default value of 1, so the default listing hits the bare endpoint.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(date) = &self.schedule_date {
            pairs.push(("scheduleDate", date.clone()));
        }
        if let Some(direction) = &self.flight_direction {
            pairs.push(("flightDirection", direction.clone()));
        }
        if let Some(airline) = &self.airline {
            pairs.push(("airline", airline.clone()));
        }
        if let Some(page) = self.page {
            if page != 1 {
                pairs.push(("page", page.to_string()));
            }
        }

        pairs
    }
}
