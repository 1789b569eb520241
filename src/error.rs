use thiserror::Error;

/// Failure taxonomy for the scout pipeline.
///
/// Every variant except `EmptyIdentifier` is absorbed at the component
/// where it occurs and converted into a "no result" outcome for that unit
/// of work; only an empty identifier is surfaced to the caller.
#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("no identifier supplied")]
    EmptyIdentifier,
}
