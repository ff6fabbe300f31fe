/// Synchronous client for the **World Bank Indicators API (v2)**.
///
/// This module focuses on the `country/{code}/indicator/{codes}` endpoint and
/// returns the raw `[metadata, dataPoints]` payload for the normalizer to
/// digest.
///
/// ### Notes
/// - Upstream failures (non-success status, timeout, malformed body, short
///   array) are all treated as "no data" and logged; they never raise.
/// - Network timeouts use a sane default (30s total, 10s connect).
///
/// Typical usage:
/// ```no_run
/// # use eds_rs::{Client, DateSpec};
/// let client = Client::default();
/// let raw = client.fetch_raw("USA", &["NY.GDP.MKTP.CD".into()], Some(DateSpec::Year(2022)));
/// ```
use crate::models::{DateSpec, RawResponse};
use log::{info, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("eds-rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://api.worldbank.org/v2".into(),
            http,
        }
    }
}

// Allow -, _, . unescaped in codes (common for indicator ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

fn enc_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().map(enc).collect::<Vec<_>>().join(";")
}

impl Client {
    /// Fetch the raw indicator payload for one country.
    ///
    /// - `country`: ISO3 country code (`"USA"`, `"DEU"`, …).
    /// - `indicators`: indicator ids, joined for the API (`"A;B"`).
    /// - `date`: a single year or inclusive range; defaults to the last
    ///   five years when absent.
    ///
    /// Returns `None` when the upstream is unavailable, answers with a
    /// non-success status, or the body is not the expected two-element
    /// array. Callers surface this as a not-found condition.
    pub fn fetch_raw(
        &self,
        country: &str,
        indicators: &[String],
        date: Option<DateSpec>,
    ) -> Option<RawResponse> {
        let country_spec = enc(country);
        let indicator_spec = enc_join(indicators.iter().map(|s| s.as_str()));
        let date = date.unwrap_or_else(DateSpec::current_window);

        let url = format!(
            "{}/country/{}/indicator/{}?format=json&per_page=1000&date={}",
            self.base_url,
            country_spec,
            indicator_spec,
            date.to_query_param()
        );
        info!("fetching data from World Bank API: GET {}", url);

        let resp = match self.http.get(&url).send() {
            Ok(r) => r,
            Err(e) => {
                warn!("world bank request failed for {}: {}", country_spec, e);
                return None;
            }
        };
        if !resp.status().is_success() {
            warn!(
                "world bank api returned HTTP {} for {}",
                resp.status(),
                country_spec
            );
            return None;
        }

        let v: Value = match resp.json() {
            Ok(v) => v,
            Err(e) => {
                warn!("world bank response for {} was not json: {}", country_spec, e);
                return None;
            }
        };
        let arr = match v.as_array() {
            Some(a) => a,
            None => {
                warn!("unexpected response shape for {}: not a top-level array", country_spec);
                return None;
            }
        };
        // Error payloads carry a "message" object in position 0.
        if arr.first().and_then(|m| m.get("message")).is_some() {
            warn!("world bank api error for {}: {}", country_spec, arr[0]);
            return None;
        }
        if arr.len() < 2 {
            warn!("no data returned from World Bank API for {}", country_spec);
            return None;
        }

        Some(arr.clone())
    }

    /// Cheap connectivity probe: one row of a well-known indicator.
    pub fn ping(&self) -> bool {
        let url = format!(
            "{}/country/USA/indicator/NY.GDP.MKTP.CD?format=json&per_page=1",
            self.base_url
        );
        match self.http.get(&url).send() {
            Ok(r) => r.status().is_success(),
            Err(e) => {
                warn!("world bank connectivity probe failed: {}", e);
                false
            }
        }
    }
}
