use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How to specify dates in API queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateSpec {
    /// Single year like 2020
    Year(i32),
    /// Inclusive range like 2000..=2020
    Range { start: i32, end: i32 },
}

impl DateSpec {
    pub fn to_query_param(&self) -> String {
        match *self {
            DateSpec::Year(y) => y.to_string(),
            DateSpec::Range { start, end } => format!("{}:{}", start, end),
        }
    }

    /// Default window when no year is requested: current year minus 5
    /// through current year.
    pub fn current_window() -> Self {
        let end = Utc::now().year();
        DateSpec::Range {
            start: end - 5,
            end,
        }
    }
}

/// Untrusted payload as received from the API: a two-element array
/// `[metadata, dataPoints]`. Shorter responses mean "no data"; nothing
/// inside is contractually guaranteed.
pub type RawResponse = Vec<Value>;

/// One observation in a normalized series. Missing fields in the feed
/// default to the empty string (`value` stays absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueRecord {
    pub year: String,
    pub value: Option<f64>,
    pub unit: String,
    #[serde(rename = "obs_status")]
    pub obs_status: String,
}

/// Per-indicator time series, unique by `code` within a response.
/// Values keep the order observed in the source feed (not guaranteed
/// chronological).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub code: String,
    pub name: String,
    pub values: Vec<ValueRecord>,
}

/// Normalized result of one provider response, ready for prompt building
/// or export. Series appear in first-seen feed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotData {
    pub country_code: String,
    pub country_name: String,
    pub indicators: Vec<IndicatorSeries>,
    pub generated_at: DateTime<Utc>,
    pub total_indicators: usize,
    pub data_point_count: usize,
}
