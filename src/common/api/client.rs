use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::error::ApiError;

// 影片库服务器的 HTTP 客户端
#[derive(Debug, Clone)]
pub struct GalleryClient {
    pub inner: Client,
}

impl GalleryClient {
    pub fn new() -> Result<Self, ApiError> {
        let inner = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .default_headers(Self::get_default_headers())
            .build()?;

        Ok(Self { inner })
    }

    /// 使用外部构建好的 reqwest 客户端
    pub fn with_client(inner: Client) -> Self {
        Self { inner }
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN,zh;q=0.9"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("missav_gallery/", env!("CARGO_PKG_VERSION"))),
        );

        headers
    }

    // 通用 GET 请求，返回 JSON 反序列化结果
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);

        let resp = self.inner.get(url).send().await.map_err(|e| {
            error!("请求失败: {}", e);
            ApiError::RequestFailed(e)
        })?;

        Self::handle_response::<T>(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let url = resp.url().to_string();

        if !status.is_success() {
            warn!("服务器返回错误状态 {}: {}", status, url);
            return Err(ApiError::Status { status, url });
        }

        let raw_body = resp.bytes().await?;
        debug!("响应长度: {} 字节", raw_body.len());

        serde_json::from_slice::<T>(&raw_body).map_err(|e| {
            error!("解析错误: {}", e);
            ApiError::MalformedResponse(format!(
                "解析响应失败: {}. 原始响应: {}",
                e,
                String::from_utf8_lossy(&raw_body)
            ))
        })
    }
}
