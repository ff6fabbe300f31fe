//! eds-rs
//!
//! A lightweight Rust library for retrieving World Bank indicator data and
//! narrating it into economic development snapshots via an LLM backend.
//! Pairs with the `eds` CLI.
//!
//! ### Features
//! - Fetch indicators for a country and a year or the default 5-year window
//! - Normalize the raw provider feed into per-indicator, per-year series
//! - Render the normalized data into a fixed analyst prompt
//! - Narrate the prompt through OpenAI or a local LM Studio server
//! - Save normalized data as CSV or JSON in a tidy, analysis-friendly schema
//!
//! ### Example
//! ```no_run
//! use eds_rs::{Client, NarrationClient, NarrationSettings, Provider, SnapshotRequest};
//!
//! let settings = NarrationSettings::from_env();
//! settings.validate()?;
//! let client = Client::default();
//! let narrator = NarrationClient::new(&settings);
//! let snap = eds_rs::snapshot::generate(
//!     &client,
//!     &narrator,
//!     &SnapshotRequest {
//!         country_code: "USA".into(),
//!         indicator_codes: vec!["NY.GDP.MKTP.CD".into()],
//!         year: Some(2022),
//!         provider: Provider::LmStudio,
//!     },
//! )?;
//! println!("{}", snap.snapshot_text);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod prompt;
pub mod snapshot;
pub mod storage;
pub mod validate;

pub use api::Client;
pub use config::{ConfigError, NarrationSettings};
pub use llm::{Narration, NarrationClient, Provider};
pub use models::{DateSpec, IndicatorSeries, SnapshotData, ValueRecord};
pub use snapshot::{Snapshot, SnapshotError, SnapshotRequest};
