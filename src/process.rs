use std::future::Future;

use chrono::Local;
use tokio::fs::File;
use tokio_util::sync::CancellationToken;

use crate::comic::Comic;
use crate::encode::RowWriter;
use crate::request::ComicClient;
use crate::{info_time, warn_time, Error, ExportConfig, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub latest: u32,
    pub rows: usize,
    pub skipped: Vec<u32>,
    pub retries: u64,
}

/// Exports every comic with the default configuration, stopping when `cancel` fires.
pub async fn extract_dataset(cancel: CancellationToken) -> Result<ExportSummary> {
    let config = ExportConfig::default();
    let client = ComicClient::new(reqwest::Client::new(), config.base_url.clone());
    export_dataset(&config, &client, &cancel).await
}

/// Finds the latest comic, then writes one row per comic `1..=latest` into
/// `config.output_path`, leaving out `config.skipped_ids`.
///
/// The output file lives only inside this call. Rows already written stay on disk
/// when it returns early.
pub async fn export_dataset(
    config: &ExportConfig,
    client: &ComicClient,
    cancel: &CancellationToken,
) -> Result<ExportSummary> {
    let start_time = Local::now();
    info_time!("Started extracting from {}", client.latest_url());

    let latest = client.latest_num().await?;
    info_time!("Latest comic: {latest}");

    let file = File::create(&config.output_path).await?;
    let mut writer = RowWriter::new(file).await?;
    let mut summary = ExportSummary {
        latest,
        ..ExportSummary::default()
    };

    for id in 1..=latest {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if config.skipped_ids.contains(&id) {
            info_time!("Skipping {id}");
            summary.skipped.push(id);
            continue;
        }

        let (body, retries) = config
            .retry
            .run(id, cancel, || client.fetch_comic_body(id))
            .await?;
        summary.retries += u64::from(retries);
        let comic = Comic::from_slice(&body)?;

        writer.write_comic(&comic).await?;
        info_time!("{}", comic.num_label());
    }

    summary.rows = writer.rows();
    writer.finish().await?;
    info_time!(
        start_time,
        "Wrote {} rows to {}",
        summary.rows,
        config.output_path.display()
    );

    Ok(summary)
}

/// Feeds interrupt signals from `next_signal` into `cancel`.
///
/// The first signal cancels the export, which then stops after the current request.
/// Returns `true` on a second signal so the caller can bail out of a hung request,
/// `false` if listening for signals fails.
pub async fn watch_interrupts<F, Fut>(cancel: CancellationToken, mut next_signal: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    if next_signal().await.is_err() {
        return false;
    }
    warn_time!("Interrupted, stopping after the current request. Interrupt again to quit now");
    cancel.cancel();

    next_signal().await.is_ok()
}
