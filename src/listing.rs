use reqwest::Client;

use crate::{info_time, Error, Result};

/// Downloads the explainxkcd comic list. Nothing reads it yet, the body is dropped
/// and only its size is returned.
pub async fn fetch_listing(client: &Client, url: &str) -> Result<usize> {
    let res = client.get(url).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::ListingStatus(status));
    }

    let body = res.bytes().await?;
    info_time!("Fetched listing page: {} bytes", body.len());
    Ok(body.len())
}
