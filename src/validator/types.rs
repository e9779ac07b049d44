use thiserror::Error;

/// Why an archive file's content was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("JSON parse error: {0}")]
    Parse(String),

    #[error("Schema error: missing thread_info")]
    MissingThreadInfo,

    #[error("Schema error: missing thread_id")]
    MissingThreadId,

    #[error("Schema error: missing messages")]
    MissingMessages,
}

impl ContentError {
    /// True for the shallow key checks, false for read and parse failures
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ContentError::MissingThreadInfo
                | ContentError::MissingThreadId
                | ContentError::MissingMessages
        )
    }
}
