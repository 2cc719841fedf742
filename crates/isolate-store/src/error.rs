/// Errors from loading or saving a store snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode snapshot: {0}")]
    Encode(String),
}
