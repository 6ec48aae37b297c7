use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

/// Request-scoped failures. Each one becomes an error `CallToolResult`; none of them ends the
/// session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),
}
