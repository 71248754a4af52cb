//! Client for the remote public-holiday source.
//!
//! One `GET /api/v3/PublicHolidays/{year}/{country}` round-trip with a hard
//! client timeout and no retry loop. Failures are surfaced as
//! [`EngineError::HolidayFetch`] for the calendar to log and absorb.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default remote holiday endpoint.
pub const DEFAULT_BASE_URL: &str = "https://date.nager.at";

/// Hard timeout for the single fetch round-trip.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// One holiday row as returned by the remote source.
///
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteHoliday {
    /// The holiday's calendar date.
    pub date: NaiveDate,
    /// Localized name, when the source provides one.
    #[serde(rename = "localName", default)]
    pub local_name: Option<String>,
    /// English name of the holiday.
    pub name: String,
}

impl RemoteHoliday {
    /// The display name preferred for merging: localized when present.
    pub fn display_name(&self) -> &str {
        self.local_name.as_deref().unwrap_or(&self.name)
    }
}

/// HTTP client for the remote holiday source.
#[derive(Debug, Clone)]
pub struct RemoteHolidaySource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteHolidaySource {
    /// Creates a source against a base URL (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::HolidayFetch`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a source against the default public endpoint.
    pub fn default_endpoint() -> EngineResult<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Fetches the public holidays of a country for a year.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::HolidayFetch`] on a transport error, timeout,
    /// non-success status, or an undecodable body.
    pub async fn fetch(&self, year: i32, country_code: &str) -> EngineResult<Vec<RemoteHoliday>> {
        let url = format!(
            "{}/api/v3/PublicHolidays/{}/{}",
            self.base_url, year, country_code
        );
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HolidayFetch {
                message: format!("unexpected status {} from {}", status, url),
            });
        }

        let holidays = response.json::<Vec<RemoteHoliday>>().await?;
        Ok(holidays)
    }
}
