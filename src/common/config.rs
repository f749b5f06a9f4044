use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::common::api::error::ApiError;

/// 影片库服务器的默认地址
pub const DEFAULT_API_BASE: &str = "http://192.168.31.61:31471";

/// 挂载点名称
pub const APP_ANCHOR: &str = "#app";

/// 服务器基础地址，所有相对路径都拼接在它后面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseAddress(String);

impl BaseAddress {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let raw = raw.trim();
        let trimmed = raw.strip_suffix('/').unwrap_or(raw);

        let url = Url::parse(trimmed)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseAddress(format!(
                "不支持的协议 {}: {}",
                url.scheme(),
                raw
            )));
        }
        if url.host_str().is_none() {
            return Err(ApiError::InvalidBaseAddress(format!("缺少主机名: {}", raw)));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::InvalidBaseAddress(format!(
                "地址不能包含查询参数或锚点: {}",
                raw
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 直接字符串拼接，不做任何规范化
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl Default for BaseAddress {
    fn default() -> Self {
        Self(DEFAULT_API_BASE.to_string())
    }
}

impl FromStr for BaseAddress {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BaseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 运行配置（由命令行参数生成）
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub api_base: BaseAddress,
    pub initial_route: String,
    pub verbose: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base: BaseAddress::default(),
            initial_route: "/".to_string(),
            verbose: false,
        }
    }
}
