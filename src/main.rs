use chrono::Local;
use tokio_util::sync::CancellationToken;
use xkcd_extract::process::{extract_dataset, watch_interrupts};
use xkcd_extract::{info_time, warn_time, Error, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let start_time = Local::now();

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if watch_interrupts(cancel, tokio::signal::ctrl_c).await {
                warn_time!("Interrupted twice, quitting");
                std::process::exit(1);
            }
        }
    });

    match extract_dataset(cancel).await {
        Ok(summary) => {
            info_time!(
                start_time,
                "Full program time: {} rows, skipped {:?}, {} retries",
                summary.rows,
                summary.skipped,
                summary.retries
            );
            Ok(())
        }
        Err(Error::Cancelled) => std::process::exit(1),
        Err(e) => Err(e),
    }
}
