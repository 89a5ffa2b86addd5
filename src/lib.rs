//! XKCD DATASET EXTRACTOR
//! Walks every comic from the JSON API and flattens it into `xkcd.csv`.
//! The listing fetcher in `bin/fetch_listing.rs` only downloads the explainxkcd
//! comic list for now.

mod error;
mod macros;

pub mod comic;
pub mod encode;
pub mod listing;
pub mod process;
pub mod request;
pub mod retry;

pub use error::{Error, Result};

use std::path::PathBuf;

use retry::RetryPolicy;

pub const BASE_URL: &str = "https://xkcd.com";
pub const FILE_PATH: &str = "xkcd.csv";
pub const LISTING_URL: &str =
    "https://www.explainxkcd.com/wiki/index.php/List_of_all_comics_(full)";
/// Comic 404 does not exist upstream.
pub const SKIPPED_IDS: &[u32] = &[404];

/// Everything the exporter needs to know about where to read from and write to.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub base_url: String,
    pub output_path: PathBuf,
    pub skipped_ids: Vec<u32>,
    pub retry: RetryPolicy,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            output_path: PathBuf::from(FILE_PATH),
            skipped_ids: SKIPPED_IDS.to_vec(),
            retry: RetryPolicy::unbounded(),
        }
    }
}
