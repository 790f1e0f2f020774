/// Errors that can occur in typed message operations.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// Frame-level error (I/O, oversized payload, closed stream).
    #[error("frame error: {0}")]
    Frame(#[from] natmsg_frame::FrameError),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MessageError>;
