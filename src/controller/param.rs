//! Query parameter types shared by the controllers.

use serde::Deserialize;

/// Pagination and sort parameters for the airline and destination listings.
#[derive(Debug, Deserialize)]
pub struct PaginationParam {
    /// Page number, defaulting to 1 upstream.
    #[serde(rename = "pageNum")]
    pub page_num: Option<u32>,
    /// Resource-specific sort key.
    #[serde(rename = "sortType")]
    pub sort_type: Option<String>,
}

/// Optional filters for the flight listing.
#[derive(Debug, Deserialize)]
pub struct FlightsFilterParam {
    /// Schedule date filter (`yyyy-mm-dd`).
    pub date: Option<String>,
    /// Direction filter (`A` for arrival, `D` for departure).
    pub direction: Option<String>,
    /// Airline IATA or ICAO code filter.
    pub airline: Option<String>,
    /// Page number, defaulting to 1.
    pub page: Option<u32>,
}

/// Query parameters for creating a reservation.
#[derive(Debug, Deserialize)]
pub struct MakeReservationParam {
    pub user_id: String,
    pub user_name: String,
    pub flight_id: String,
    pub seat: String,
}
