#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("no document available")]
    MissingDocument,
}
