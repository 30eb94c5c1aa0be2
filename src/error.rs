use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't assemble the browser configuration: {0}")]
    BrowserConfig(String),

    #[error("Browser Error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("Navigation to {url} didn't finish within {timeout_ms} ms")]
    NavigationTimeout { url: String, timeout_ms: u64 },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Partition namespace `{0}` is missing. Did the listing stage run?")]
    MissingNamespace(String),
}
