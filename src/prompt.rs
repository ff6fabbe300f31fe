//! Fixed prompt template for the narration backend.
//!
//! The string produced here is the sole contract the narration backend
//! depends on; both providers accept the same shape.

use crate::models::IndicatorSeries;

/// System instruction sent alongside every snapshot prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You are an expert economic analyst specializing in economic development analysis.";

/// Render normalized indicators into the analyst prompt.
///
/// Deterministic and pure. Value records without a value are skipped
/// entirely; missing observations never show up as blank or "None" lines.
pub fn build_snapshot_prompt(country_name: &str, indicators: &[IndicatorSeries]) -> String {
    let mut prompt = format!(
        "You are an economic analyst. Generate a comprehensive economic development snapshot for {country_name} based on the following data.\n\
         \n\
         Please provide:\n\
         1. A brief overview of the country's economic situation\n\
         2. Analysis of key economic indicators\n\
         3. Trends and patterns in the data\n\
         4. Potential implications for economic development\n\
         5. A summary conclusion\n\
         \n\
         Economic Data for {country_name}:\n"
    );

    for indicator in indicators {
        prompt.push_str(&format!("\n{} ({}):\n", indicator.name, indicator.code));
        for record in &indicator.values {
            if let Some(value) = record.value {
                prompt.push_str(&format!("  {}: {} {}\n", record.year, value, record.unit));
            }
        }
    }

    prompt.push_str("\nPlease provide a professional, data-driven analysis in 3-4 paragraphs.");
    prompt
}
