use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::comic::value_as_u32;
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct Latest {
    num: Value,
}

/// Thin wrapper around `reqwest::Client` that knows the comic API layout.
#[derive(Debug, Clone)]
pub struct ComicClient {
    client: Client,
    base_url: String,
}

impl ComicClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn latest_url(&self) -> String {
        format!("{}/info.0.json", self.base_url)
    }

    pub fn comic_url(&self, id: u32) -> String {
        format!("{}/{id}/info.0.json", self.base_url)
    }

    /// Number of the newest comic. Not retried, a failure here ends the run.
    pub async fn latest_num(&self) -> Result<u32> {
        let bytes = self.get_bytes(&self.latest_url()).await?;
        let latest: Latest = serde_json::from_slice(&bytes)?;
        value_as_u32(&latest.num)
            .filter(|num| *num > 0)
            .ok_or_else(|| Error::InvalidLatest(latest.num.to_string()))
    }

    /// Requests the raw body of a single comic. Any non-success status counts as a failure.
    /// Parsing is left to the caller so a bad body isn't mistaken for a network error.
    pub async fn fetch_comic_body(&self, id: u32) -> Result<Vec<u8>> {
        self.get_bytes(&self.comic_url(id)).await
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        let bytes = res.bytes().await?;
        Ok(bytes.to_vec())
    }
}
