//! Reshape the nested provider payload into flat per-indicator series.
//!
//! The feed's schema is not contractually guaranteed, so every field is read
//! through explicit optional access and defaulted per field instead of
//! trusting the shape.

use chrono::Utc;
use serde_json::Value;

use crate::models::{IndicatorSeries, SnapshotData, ValueRecord};

/// Normalize a raw `[metadata, dataPoints]` payload.
///
/// Returns `None` when the payload has fewer than two elements (treated as
/// "no data", not an error). Data points whose indicator code was not
/// requested are silently dropped; series appear in first-seen feed order.
pub fn normalize(
    raw: &[Value],
    country_code: &str,
    requested: &[String],
) -> Option<SnapshotData> {
    if raw.len() < 2 {
        return None;
    }

    // Country display name lives at metadata.country[0].value; any break in
    // that path falls back to "Unknown".
    let country_name = raw[0]
        .get("country")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("value"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown");

    let data_points: &[Value] = raw[1].as_array().map(Vec::as_slice).unwrap_or(&[]);

    let mut indicators: Vec<IndicatorSeries> = Vec::new();
    for point in data_points {
        let Some(code) = point
            .get("indicator")
            .and_then(|i| i.get("id"))
            .and_then(Value::as_str)
        else {
            continue;
        };
        if !requested.iter().any(|r| r == code) {
            continue;
        }

        let idx = match indicators.iter().position(|s| s.code == code) {
            Some(i) => i,
            None => {
                let name = point
                    .get("indicator")
                    .and_then(|i| i.get("value"))
                    .and_then(Value::as_str)
                    .unwrap_or("");
                indicators.push(IndicatorSeries {
                    code: code.to_string(),
                    name: name.to_string(),
                    values: Vec::new(),
                });
                indicators.len() - 1
            }
        };

        indicators[idx].values.push(ValueRecord {
            year: point
                .get("date")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            value: point.get("value").and_then(Value::as_f64),
            unit: point
                .get("unit")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            obs_status: point
                .get("obs_status")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
        });
    }

    Some(SnapshotData {
        country_code: country_code.to_string(),
        country_name: country_name.to_string(),
        total_indicators: indicators.len(),
        data_point_count: data_points.len(),
        indicators,
        generated_at: Utc::now(),
    })
}
