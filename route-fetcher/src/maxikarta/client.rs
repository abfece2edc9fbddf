//! Maxikarta HTTP client.
//!
//! Provides async methods for the three query endpoints: the route
//! catalogue, per-route geometry, and per-route stations.

use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::types::{RouteGeometryResponse, RouteSummaryDto, RoutesResponse, StationsResponse};

/// Default base URL for the maxikarta transit query API.
const DEFAULT_BASE_URL: &str = "http://www.maxikarta.ru/msk/transport/query";

/// Configuration for the maxikarta client.
#[derive(Debug, Clone)]
pub struct MaxikartaConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MaxikartaConfig {
    /// Create a config with the default production base URL.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MaxikartaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the maxikarta transit query API.
#[derive(Debug, Clone)]
pub struct MaxikartaClient {
    http: reqwest::Client,
    base_url: String,
}

impl MaxikartaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MaxikartaConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the full route catalogue.
    pub async fn routes(&self) -> Result<Vec<RouteSummaryDto>, FetchError> {
        let response: RoutesResponse = self.get_json("routes", &[]).await?;
        Ok(response.routes)
    }

    /// Fetch the raw geometry fragments for one route.
    pub async fn route_geometry(&self, route_id: u64) -> Result<RouteGeometryResponse, FetchError> {
        self.get_json("route-geom", &[("route_id", route_id)]).await
    }

    /// Fetch the raw station list for one route.
    pub async fn route_stations(&self, route_id: u64) -> Result<StationsResponse, FetchError> {
        self.get_json("stations", &[("route_id", route_id)]).await
    }

    /// Issue a GET against one endpoint and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, u64)],
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::debug!(%url, "requesting");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Json {
            message: e.to_string(),
        })
    }
}
