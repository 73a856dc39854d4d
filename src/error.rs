use thiserror::Error;

#[derive(Debug, Error)]
pub enum KenkuError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode or decode config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request task failed: {0}")]
    RequestTask(#[from] tokio::task::JoinError),
    #[error("no button {index} (note has {count})")]
    NoSuchButton { index: usize, count: usize },
}
