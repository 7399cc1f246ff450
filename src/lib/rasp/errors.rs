use thiserror::Error;

/// Everything that can go wrong while talking to the timetable site.
///
/// Only selector lookups surface these to the caller. Schedule lookups log
/// them and fall back to empty data.
#[derive(Debug, Error)]
pub enum RaspError {
    #[error("couldn't access the site: {url} answered with {status}")]
    UnreachableOrigin {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("request to the site failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("no selector named {name:?} in the navigator response")]
    MissingSelector { name: String },
    #[error("lesson slot must be within 1..=8, got {0}")]
    InvalidSlot(u8),
    #[error("bad configuration: {0}")]
    Config(#[from] figment::Error),
    #[error("couldn't serialize the result: {0}")]
    Json(#[from] serde_json::Error),
}
