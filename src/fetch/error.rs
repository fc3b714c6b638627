//! Firecrawl客户端错误类型

use std::sync::Arc;

/// Firecrawl API调用错误
#[derive(Debug, Clone, thiserror::Error)]
pub enum FirecrawlError {
    #[error("missing API key: FIRECRAWL_API_KEY not set")]
    MissingApiKey,

    #[error("authentication failed: invalid API key")]
    AuthError,

    #[error("rate limited: too many requests")]
    RateLimited,

    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("request timeout")]
    Timeout,

    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    #[error("parse error: {0}")]
    Parse(String),

    /// 接口返回 `success: false`
    #[error("request unsuccessful: {0}")]
    Unsuccessful(String),
}

impl From<reqwest::Error> for FirecrawlError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FirecrawlError::Timeout
        } else {
            FirecrawlError::Network(Arc::new(err))
        }
    }
}
