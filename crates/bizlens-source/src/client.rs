//! HTTP client for the Business Profile APIs.
//!
//! Locations come from the Business Information API, daily insights from the
//! Performance API, and reviews from the My Business v4 API. Every call is
//! authenticated with the session's bearer token.

use std::time::Duration;

use bizlens_core::{DateRange, InsightRow, Location, Review};
use chrono::Datelike;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::normalize::{
    insight_rows, location_from_api, resource_id, review_from_api, DAILY_METRICS,
};
use crate::types::{LocationsPage, MultiDailyMetricsResponse, ReviewsPage};

pub const DEFAULT_API_BASE_URL: &str = "https://mybusiness.googleapis.com/";
pub const DEFAULT_PERFORMANCE_BASE_URL: &str = "https://businessprofileperformance.googleapis.com/";

const LOCATION_READ_MASK: &str = "name,title,storefrontAddress,phoneNumbers,labels";
const LOCATIONS_PAGE_SIZE: &str = "100";
const REVIEWS_PAGE_SIZE: &str = "50";

/// Build the shared `reqwest` client used by every bizlens HTTP caller.
pub(crate) fn http_client(timeout_secs: u64) -> Result<Client, SourceError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent("bizlens/0.1 (business-profile-analytics)")
        .build()?)
}

/// Ensure the base URL ends with exactly one slash so relative joins append
/// to its path instead of replacing the last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, SourceError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

/// Client for the Business Profile REST APIs.
///
/// Use [`BusinessProfileClient::new`] for production or
/// [`BusinessProfileClient::with_base_url`] to point at a mock server.
pub struct BusinessProfileClient {
    client: Client,
    access_token: String,
    api_base: Url,
    performance_base: Url,
}

impl std::fmt::Debug for BusinessProfileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BusinessProfileClient")
            .field("access_token", &"[redacted]")
            .field("api_base", &self.api_base.as_str())
            .field("performance_base", &self.performance_base.as_str())
            .finish_non_exhaustive()
    }
}

impl BusinessProfileClient {
    /// Creates a client pointed at the production APIs.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(access_token: &str, timeout_secs: u64) -> Result<Self, SourceError> {
        Self::with_base_url(
            access_token,
            timeout_secs,
            DEFAULT_API_BASE_URL,
            DEFAULT_PERFORMANCE_BASE_URL,
        )
    }

    /// Creates a client with custom base URLs (configuration or wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`SourceError::InvalidBaseUrl`] if either URL does not parse.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        api_base_url: &str,
        performance_base_url: &str,
    ) -> Result<Self, SourceError> {
        Ok(Self {
            client: http_client(timeout_secs)?,
            access_token: access_token.to_owned(),
            api_base: parse_base_url(api_base_url)?,
            performance_base: parse_base_url(performance_base_url)?,
        })
    }

    /// Lists every location of an account, following `nextPageToken`.
    ///
    /// `account_id` may be bare (`123`) or a resource name (`accounts/123`).
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SourceError::Deserialize`] if a page does not match the expected shape.
    pub async fn list_locations(&self, account_id: &str) -> Result<Vec<Location>, SourceError> {
        let account = resource_id(account_id, "accounts");
        let path = format!("v1/accounts/{account}/locations");
        let mut locations = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = join(&self.api_base, &path)?;
            {
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("readMask", LOCATION_READ_MASK);
                pairs.append_pair("pageSize", LOCATIONS_PAGE_SIZE);
                if let Some(token) = &page_token {
                    pairs.append_pair("pageToken", token);
                }
            }

            let page: LocationsPage = self
                .get_json(&url, &format!("locations.list(account={account})"))
                .await?;
            locations.extend(page.locations.into_iter().map(location_from_api));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(account, count = locations.len(), "listed locations");
        Ok(locations)
    }

    /// Fetches one row per day of `range` for `location`.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SourceError::Deserialize`] if the response does not match the expected shape.
    pub async fn fetch_insights(
        &self,
        location: &Location,
        range: &DateRange,
    ) -> Result<Vec<InsightRow>, SourceError> {
        let path = format!(
            "v1/locations/{}:fetchMultiDailyMetricsTimeSeries",
            location.id
        );
        let mut url = join(&self.performance_base, &path)?;
        {
            let (start, end) = (range.start(), range.end());
            let mut pairs = url.query_pairs_mut();
            for metric in DAILY_METRICS {
                pairs.append_pair("dailyMetrics", metric);
            }
            pairs.append_pair("dailyRange.startDate.year", &start.year().to_string());
            pairs.append_pair("dailyRange.startDate.month", &start.month().to_string());
            pairs.append_pair("dailyRange.startDate.day", &start.day().to_string());
            pairs.append_pair("dailyRange.endDate.year", &end.year().to_string());
            pairs.append_pair("dailyRange.endDate.month", &end.month().to_string());
            pairs.append_pair("dailyRange.endDate.day", &end.day().to_string());
        }

        let response: MultiDailyMetricsResponse = self
            .get_json(
                &url,
                &format!("fetchMultiDailyMetricsTimeSeries(location={})", location.id),
            )
            .await?;
        let rows = insight_rows(response, location, range);

        tracing::debug!(location = %location.id, days = rows.len(), "fetched insights");
        Ok(rows)
    }

    /// Fetches every review of `location`, following `nextPageToken`.
    ///
    /// Ids are assigned from 1 in response order. Reviews with an unknown
    /// star rating or timestamp are skipped.
    ///
    /// # Errors
    ///
    /// - [`SourceError::Http`] on network failure.
    /// - [`SourceError::UnexpectedStatus`] on a non-2xx response.
    /// - [`SourceError::Deserialize`] if a page does not match the expected shape.
    pub async fn fetch_reviews(
        &self,
        account_id: &str,
        location: &Location,
    ) -> Result<Vec<Review>, SourceError> {
        let account = resource_id(account_id, "accounts");
        let path = format!("v4/accounts/{account}/locations/{}/reviews", location.id);
        let mut reviews = Vec::new();
        let mut next_id = 1_i64;
        let mut page_token: Option<String> = None;

        loop {
            let mut url = join(&self.api_base, &path)?;
            {
                let mut pairs = url.query_pairs_mut();
                pairs.append_pair("pageSize", REVIEWS_PAGE_SIZE);
                if let Some(token) = &page_token {
                    pairs.append_pair("pageToken", token);
                }
            }

            let page: ReviewsPage = self
                .get_json(&url, &format!("reviews.list(location={})", location.id))
                .await?;
            for api in page.reviews {
                if let Some(review) = review_from_api(api, next_id, location) {
                    reviews.push(review);
                    next_id += 1;
                }
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(location = %location.id, count = reviews.len(), "fetched reviews");
        Ok(reviews)
    }

    /// Sends an authenticated GET, asserts a 2xx status, and parses the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

fn join(base: &Url, path: &str) -> Result<Url, SourceError> {
    base.join(path).map_err(|e| SourceError::InvalidBaseUrl {
        url: format!("{base}{path}"),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_single_trailing_slash() {
        assert_eq!(
            parse_base_url("http://localhost:1234//").unwrap().as_str(),
            "http://localhost:1234/"
        );
        assert_eq!(
            parse_base_url("http://localhost:1234/api").unwrap().as_str(),
            "http://localhost:1234/api/"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = parse_base_url("not a url").unwrap_err();
        assert!(matches!(err, SourceError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn join_keeps_base_path_and_colon_suffix() {
        let base = parse_base_url("http://localhost:1234/perf").unwrap();
        let url = join(&base, "v1/locations/12:fetchMultiDailyMetricsTimeSeries").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:1234/perf/v1/locations/12:fetchMultiDailyMetricsTimeSeries"
        );
    }

    #[test]
    fn debug_redacts_token() {
        let client = BusinessProfileClient::new("secret-token", 5).unwrap();
        let out = format!("{client:?}");
        assert!(!out.contains("secret-token"));
        assert!(out.contains("[redacted]"));
    }
}
