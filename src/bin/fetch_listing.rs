use xkcd_extract::{listing::fetch_listing, warn_time, LISTING_URL};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let client = reqwest::Client::new();
    if let Err(e) = fetch_listing(&client, LISTING_URL).await {
        warn_time!("Error getting listing page: {e}");
        std::process::exit(1);
    }
}
