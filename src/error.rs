use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Comic {num} is missing the attribute: {attr}")]
    MissingAttribute { num: u32, attr: &'static str },
    #[error("The latest comic doesn't carry a usable `num`: {0}")]
    InvalidLatest(String),

    #[error("Listing page request failed with status: {0}")]
    ListingStatus(StatusCode),

    #[error("Cancelled by the user.")]
    Cancelled,
    #[error("Gave up on comic {id} after {attempts} attempts. Last error: {last}")]
    RetriesExhausted {
        id: u32,
        attempts: u32,
        last: Box<Error>,
    },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
