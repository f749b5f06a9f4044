use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("网络请求失败: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("服务器返回错误状态 {status}: {url}")]
    Status { status: StatusCode, url: String },

    #[error("响应解析失败: {0}")]
    MalformedResponse(String),

    #[error("无效的服务器地址: {0}")]
    InvalidBaseAddress(String),
}

impl ApiError {
    /// 传输层错误与非 2xx 状态都算作请求失败
    pub fn is_request_failed(&self) -> bool {
        matches!(self, ApiError::RequestFailed(_) | ApiError::Status { .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedResponse(e.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidBaseAddress(e.to_string())
    }
}
