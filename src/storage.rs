use crate::models::SnapshotData;
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save normalized data as CSV with header, one row per observation.
pub fn save_csv<P: AsRef<Path>>(data: &SnapshotData, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "country_code",
        "country_name",
        "indicator_code",
        "indicator_name",
        "year",
        "value",
        "unit",
        "obs_status",
    ))?;
    for series in &data.indicators {
        for record in &series.values {
            wtr.serialize((
                &data.country_code,
                &data.country_name,
                &series.code,
                &series.name,
                &record.year,
                record.value,
                &record.unit,
                &record.obs_status,
            ))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save any serializable value (normalized data or a full snapshot) as
/// pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
