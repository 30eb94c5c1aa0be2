//! CREATOR DIRECTORY SCRAPER
//!
//! One-shot batch job against the creator directory:
//! list every creator per category, enrich each one from its own page,
//! then write the aggregated market report.

mod browser;
mod error;
mod macros;

pub mod categories;
pub mod detail;
pub mod listing;
pub mod process;
pub mod records;
pub mod report;
pub mod store;

pub use error::{Error, Result};

const BASE_URL: &str = "http://127.0.0.1:3000";
/// Stub partitions written by the listing stage.
pub const STUB_NAMESPACE: &str = "creators";
/// Detail partitions written by the enrichment stage.
pub const DETAIL_NAMESPACE: &str = "creators-details";
pub const REPORT_PATH: &str = "creator-report.txt";
/// Single deadline applied uniformly to every navigation.
const NAV_TIMEOUT_MS: u64 = 30_000;
/// Fallback name for a listing card without a readable heading.
pub const UNKNOWN_CREATOR: &str = "Unknown Creator";
