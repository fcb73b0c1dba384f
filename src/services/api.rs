use crate::config::Config;
use crate::models::{
    error::{AppError, FetchFailure},
    skip::Skip,
};
use reqwest::Url;
use std::time::Duration;

// CONSTANTS
const BASE_URL: &str = "https://app.wewantwaste.co.uk/api";
const SKIPS_PATH: &str = "skips/by-location";

/// Postcode and area pair sent to the inventory service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub postcode: String,
    pub area: String,
}

impl Location {
    pub fn new(postcode: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            postcode: postcode.into(),
            area: area.into(),
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(Config::DEFAULT_POSTCODE, Config::DEFAULT_AREA)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.postcode, self.area)
    }
}

// API CONFIGURATION
/// Configuration for the skip inventory client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Constructs the lookup URL with the location as query values.
    pub fn skips_url(&self, location: &Location) -> Result<Url, FetchFailure> {
        let endpoint = format!("{}/{SKIPS_PATH}", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(
            &endpoint,
            &[
                ("postcode", location.postcode.as_str()),
                ("area", location.area.as_str()),
            ],
        )
        .map_err(|e| FetchFailure::InvalidUrl(format!("{endpoint}: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_millis(Config::REQUEST_TIMEOUT_MS)),
        }
    }
}

// SKIP CLIENT
/// HTTP client for the skip inventory API.
///
/// Cheap to clone; passed to the selector through props rather than held
/// in a global.
#[derive(Debug, Clone, Default)]
pub struct SkipClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PartialEq for SkipClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl SkipClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetches the skips offered at `location`.
    ///
    /// A single attempt; every failure is logged with its cause and reported
    /// as [`AppError::FetchFailed`].
    pub async fn fetch_skips(&self, location: &Location) -> Result<Vec<Skip>, AppError> {
        let outcome = settle(self.fetch(location).await);

        for reason in &outcome.rejected {
            gloo::console::warn!(&format!("Ignoring skip record: {reason}"));
        }
        if let Some(failure) = &outcome.failure {
            gloo::console::error!(&format!("Error fetching skips for {location}: {failure}"));
        }

        outcome.result
    }

    /// Executes a single fetch attempt. Records are decoded later, one by one.
    async fn fetch(&self, location: &Location) -> Result<Vec<serde_json::Value>, FetchFailure> {
        let url = self.config.skips_url(location)?;

        let response = self
            .http
            .get(url)
            .timeout(self.config.timeout())
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(error_for_status(status, body));
        }

        response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}

/// Result of one fetch as the UI sees it, plus what went wrong for the log.
#[derive(Debug, PartialEq)]
pub struct FetchOutcome {
    pub result: Result<Vec<Skip>, AppError>,
    /// Cause behind `AppError::FetchFailed`, if the request failed.
    pub failure: Option<FetchFailure>,
    /// One reason per record that was skipped.
    pub rejected: Vec<String>,
}

/// Turns a raw response into the caller-visible result.
///
/// Any request failure collapses to [`AppError::FetchFailed`]. A record that
/// does not decode (missing field, negative size) or breaks
/// [`Skip::validate`] is skipped on its own without failing the list.
pub fn settle(raw: Result<Vec<serde_json::Value>, FetchFailure>) -> FetchOutcome {
    let records = match raw {
        Ok(records) => records,
        Err(failure) => {
            return FetchOutcome {
                result: Err(AppError::FetchFailed),
                failure: Some(failure),
                rejected: Vec::new(),
            };
        }
    };

    let mut skips = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Skip>(record) {
            Ok(skip) => match skip.validate() {
                Ok(()) => skips.push(skip),
                Err(e) => rejected.push(e.to_string()),
            },
            Err(e) => rejected.push(format!("record {index}: {e}")),
        }
    }

    FetchOutcome {
        result: Ok(skips),
        failure: None,
        rejected,
    }
}

/// Converts a reqwest error into the matching failure kind.
fn classify_error(error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout(error.to_string())
    } else if error.is_decode() {
        FetchFailure::Decode(error.to_string())
    } else {
        FetchFailure::Network(error.to_string())
    }
}

fn error_for_status(status: reqwest::StatusCode, body: String) -> FetchFailure {
    FetchFailure::Status {
        status: status.as_u16(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skip::SkipId;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_skips_url_construction() {
        let config = ApiConfig::default();
        let url = config.skips_url(&Location::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://app.wewantwaste.co.uk/api/skips/by-location?postcode=NR32&area=Lowestoft"
        );
    }

    #[test]
    fn test_skips_url_encodes_query_values() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:8080/api/")
            .build();
        let url = config
            .skips_url(&Location::new("NR30 1AB", "Great Yarmouth"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/skips/by-location?postcode=NR30+1AB&area=Great+Yarmouth"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::builder().base_url("not a url").build();
        let result = config.skips_url(&Location::default());
        assert!(matches!(result, Err(FetchFailure::InvalidUrl(_))));
    }

    #[test]
    fn test_error_for_status() {
        let failure = error_for_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "boom".to_string(),
        );
        assert_eq!(
            failure,
            FetchFailure::Status {
                status: 500,
                body: "boom".to_string()
            }
        );
        assert_eq!(failure.to_string(), "Unexpected status 500: boom");
    }

    #[test]
    fn test_clients_compare_by_config() {
        let a = SkipClient::new();
        let b = SkipClient::with_config(ApiConfig::default());
        let c = SkipClient::with_config(ApiConfig::builder().base_url("http://x").build());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_settle_skips_bad_records_individually() {
        let records = serde_json::json!([
            {
                "id": 1, "size": 6, "hire_period_days": 14, "price_before_vat": 305,
                "vat": 20, "allowed_on_road": true, "allows_heavy_waste": false,
                "forbidden": false
            },
            {
                "id": 2, "size": -4, "hire_period_days": 14, "price_before_vat": 278,
                "vat": 20, "allowed_on_road": true, "allows_heavy_waste": false,
                "forbidden": false
            },
            {
                "id": 3, "size": 8, "price_before_vat": 374, "vat": 20
            },
            {
                "id": 4, "size": 0, "hire_period_days": 14, "price_before_vat": 100,
                "vat": 20, "allowed_on_road": true, "allows_heavy_waste": false,
                "forbidden": false
            }
        ]);
        let serde_json::Value::Array(records) = records else {
            panic!("expected a JSON array");
        };

        let outcome = settle(Ok(records));

        let ids: Vec<SkipId> = outcome.result.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(outcome.rejected.len(), 3);
        assert!(outcome.rejected[0].starts_with("record 1:"));
        assert!(outcome.rejected[1].starts_with("record 2:"));
        assert!(outcome.rejected[2].contains("zero size"));
        assert_eq!(outcome.failure, None);
    }

    #[test]
    fn test_settle_empty_response_is_success() {
        let outcome = settle(Ok(Vec::new()));
        assert_eq!(outcome.result, Ok(Vec::new()));
        assert!(outcome.rejected.is_empty());
    }
}
