//! Client for the upstream Schiphol public flight API.
//!
//! All requests are plain parameterized GETs carrying the `app_id`/`app_key`
//! credentials and `ResourceVersion: v4` headers. List and detail payloads are
//! forwarded as raw JSON; only the single-flight lookup is typed, because the
//! reservation workflow inspects it.

use axum::http::StatusCode;
use serde_json::Value;

use crate::{
    config::UpstreamConfig,
    error::AppError,
    model::flight::{FlightRecord, FlightsQuery},
};

const DEFAULT_AIRLINE_SORT: &str = "publicName";
const DEFAULT_DESTINATION_SORT: &str = "country";
const DEFAULT_PAGE: u32 = 1;

/// Source of upstream flight records.
///
/// Seam between the reservation workflow and the upstream API, so the
/// workflow can be exercised against a stub in tests.
pub trait FlightSource {
    /// Fetches a single flight by ID.
    ///
    /// # Returns
    /// - `Ok(Some(FlightRecord))` - Flight found
    /// - `Ok(None)` - No such flight upstream (HTTP 204)
    /// - `Err(AppError)` - Network failure or unexpected upstream status
    fn get_flight(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<FlightRecord>, AppError>> + Send;
}

/// Service providing parameterized GET access to the upstream flight API.
pub struct FlightApiService<'a> {
    http: &'a reqwest::Client,
    upstream: &'a UpstreamConfig,
}

impl<'a> FlightApiService<'a> {
    /// Creates a new FlightApiService instance.
    pub fn new(http: &'a reqwest::Client, upstream: &'a UpstreamConfig) -> Self {
        Self { http, upstream }
    }

    /// Gets a page of airlines.
    ///
    /// Defaults to page 1 sorted by `publicName`; the upstream query always
    /// carries both parameters.
    ///
    /// # Returns
    /// - `Ok(Value)` - Upstream JSON payload, forwarded unmodified
    /// - `Err(AppError)` - Network failure or non-success upstream status
    pub async fn get_airlines(
        &self,
        page: Option<u32>,
        sort: Option<&str>,
    ) -> Result<Value, AppError> {
        let url = format!("{}/airlines", self.upstream.base_url);
        let response = self
            .request(&url)
            .query(&[
                ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
                ("sort", sort.unwrap_or(DEFAULT_AIRLINE_SORT).to_string()),
            ])
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Gets a single airline by its IATA or ICAO code.
    pub async fn get_airline(&self, code: &str) -> Result<Value, AppError> {
        let url = format!("{}/airlines/{}", self.upstream.base_url, code);
        let response = self.request(&url).send().await?;

        Self::read_json(response).await
    }

    /// Gets a page of destinations.
    ///
    /// Defaults to page 1 sorted by `country`.
    pub async fn get_destinations(
        &self,
        page: Option<u32>,
        sort: Option<&str>,
    ) -> Result<Value, AppError> {
        let url = format!("{}/destinations", self.upstream.base_url);
        let response = self
            .request(&url)
            .query(&[
                ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
                ("sort", sort.unwrap_or(DEFAULT_DESTINATION_SORT).to_string()),
            ])
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Gets a single destination by its IATA code.
    pub async fn get_destination(&self, code: &str) -> Result<Value, AppError> {
        let url = format!("{}/destinations/{}", self.upstream.base_url, code);
        let response = self.request(&url).send().await?;

        Self::read_json(response).await
    }

    /// Gets a page of flights with optional filters.
    ///
    /// Filters absent from `query` are omitted from the upstream query string;
    /// see [`FlightsQuery::to_query_pairs`].
    pub async fn get_flights(&self, query: &FlightsQuery) -> Result<Value, AppError> {
        let url = format!("{}/flights", self.upstream.base_url);
        let response = self
            .request(&url)
            .query(&query.to_query_pairs())
            .send()
            .await?;

        Self::read_json(response).await
    }

    /// Builds a GET request with the upstream authentication headers.
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("Accept", "application/json")
            .header("app_id", &self.upstream.app_id)
            .header("app_key", &self.upstream.app_key)
            .header("ResourceVersion", "v4")
    }

    /// Reads a JSON body from a successful response.
    ///
    /// Any non-success status is an upstream error, surfaced to the caller
    /// as a 500-class failure.
    async fn read_json(response: reqwest::Response) -> Result<Value, AppError> {
        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status()));
        }

        Ok(response.json::<Value>().await?)
    }
}

impl FlightSource for FlightApiService<'_> {
    /// Fetches a single flight by ID.
    ///
    /// The upstream API answers 204 for unknown flight IDs; that maps to
    /// `Ok(None)` so callers must check for it explicitly before treating the
    /// result as data.
    async fn get_flight(&self, id: &str) -> Result<Option<FlightRecord>, AppError> {
        let url = format!("{}/flights/{}", self.upstream.base_url, id);
        let response = self.request(&url).send().await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status()));
        }

        Ok(Some(response.json::<FlightRecord>().await?))
    }
}
