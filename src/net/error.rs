//! Transport-level failures of the remote auth/role service.

/// Failure to obtain a usable response from the remote service.
///
/// Credential rejections are not errors at this layer; they arrive as a
/// `detail` field inside an otherwise successful response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}
