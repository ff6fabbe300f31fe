//! Request orchestration: validate, fetch, normalize, prompt, narrate,
//! shape the response.

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use thiserror::Error;

use crate::api::Client;
use crate::llm::{NarrationClient, Provider};
use crate::models::{DateSpec, IndicatorSeries, SnapshotData};
use crate::normalize::normalize;
use crate::prompt::build_snapshot_prompt;
use crate::validate::{is_valid_country_code, is_valid_indicator_code};

/// Recoverable request faults. Invalid input is rejected before any network
/// call; `NoData` covers upstream unavailable, empty, or too-short
/// responses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("invalid indicator code: {0}")]
    InvalidIndicatorCode(String),
    #[error("at least one indicator code required")]
    NoIndicators,
    #[error("no data found for the specified parameters")]
    NoData,
}

/// One snapshot request, as accepted by the CLI surface.
#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    pub country_code: String,
    pub indicator_codes: Vec<String>,
    /// Restrict to a single year; defaults to the last five years.
    pub year: Option<i32>,
    pub provider: Provider,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotMeta {
    pub provider: Provider,
    pub year: Option<i32>,
    pub indicator_count: usize,
}

/// The generated narrative plus the structured data it was derived from.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub country_code: String,
    pub country_name: String,
    pub indicators: Vec<IndicatorSeries>,
    pub snapshot_text: String,
    pub generated_at: DateTime<Utc>,
    pub metadata: SnapshotMeta,
}

/// Validate the request, then fetch and normalize. Shared by the snapshot
/// and raw-data paths.
pub fn fetch_data(client: &Client, request: &SnapshotRequest) -> Result<SnapshotData, SnapshotError> {
    if !is_valid_country_code(&request.country_code) {
        return Err(SnapshotError::InvalidCountryCode(request.country_code.clone()));
    }
    if request.indicator_codes.is_empty() {
        return Err(SnapshotError::NoIndicators);
    }
    for code in &request.indicator_codes {
        if !is_valid_indicator_code(code) {
            return Err(SnapshotError::InvalidIndicatorCode(code.clone()));
        }
    }

    info!("fetching data for country: {}", request.country_code);
    let raw = client
        .fetch_raw(
            &request.country_code,
            &request.indicator_codes,
            request.year.map(DateSpec::Year),
        )
        .ok_or(SnapshotError::NoData)?;

    normalize(&raw, &request.country_code, &request.indicator_codes).ok_or(SnapshotError::NoData)
}

/// Run the full pipeline and shape the response.
///
/// Narration never fails the request; a backend fault is returned as
/// error-shaped `snapshot_text` alongside the intact data.
pub fn generate(
    client: &Client,
    narrator: &NarrationClient,
    request: &SnapshotRequest,
) -> Result<Snapshot, SnapshotError> {
    let data = fetch_data(client, request)?;

    let prompt = build_snapshot_prompt(&data.country_name, &data.indicators);
    info!("generating snapshot with {}", request.provider);
    let narration = narrator.narrate(&prompt, request.provider);

    Ok(Snapshot {
        country_code: data.country_code,
        country_name: data.country_name,
        indicators: data.indicators,
        snapshot_text: narration.text,
        generated_at: data.generated_at,
        metadata: SnapshotMeta {
            provider: request.provider,
            year: request.year,
            indicator_count: request.indicator_codes.len(),
        },
    })
}
