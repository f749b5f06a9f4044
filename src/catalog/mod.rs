//! 影片库数据访问
//!
//! 服务器返回的是相对路径，这里统一拼接成完整URL后再交给调用方。

pub mod rewrite;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::common::api::client::GalleryClient;
use crate::common::api::error::ApiError;
use crate::common::api::models::video::{RawVideoDetail, VideoDetail, VideoSummary};
use crate::common::config::BaseAddress;

pub use rewrite::{rewrite_detail, rewrite_summary};

/// 影片数据来源
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn get_video_list(&self) -> Result<Vec<VideoSummary>, ApiError>;

    async fn get_video_detail(&self, id: &str) -> Result<VideoDetail, ApiError>;
}

#[derive(Debug, Clone)]
pub struct VideoCatalog {
    client: GalleryClient,
    base: BaseAddress,
}

impl VideoCatalog {
    pub fn new(client: GalleryClient, base: BaseAddress) -> Self {
        Self { client, base }
    }

    pub fn base(&self) -> &BaseAddress {
        &self.base
    }

    // 获取影片列表
    pub async fn get_video_list(&self) -> Result<Vec<VideoSummary>, ApiError> {
        let url = self.base.join("/api/videos");
        let videos: Vec<VideoSummary> = self.client.get(&url).await?;
        info!("获取到 {} 个影片", videos.len());

        Ok(videos
            .into_iter()
            .map(|video| rewrite_summary(&self.base, video))
            .collect())
    }

    // 获取影片详情，id 直接拼进路径
    pub async fn get_video_detail(&self, id: &str) -> Result<VideoDetail, ApiError> {
        let url = self.base.join(&format!("/api/videos/{}", id));
        let raw: RawVideoDetail = self.client.get(&url).await?;
        debug!(
            "影片 {} 有 {} 张剧照",
            id,
            raw.fanarts.as_ref().map_or(0, Vec::len)
        );

        Ok(rewrite_detail(&self.base, raw))
    }
}

#[async_trait]
impl CatalogSource for VideoCatalog {
    async fn get_video_list(&self) -> Result<Vec<VideoSummary>, ApiError> {
        VideoCatalog::get_video_list(self).await
    }

    async fn get_video_detail(&self, id: &str) -> Result<VideoDetail, ApiError> {
        VideoCatalog::get_video_detail(self, id).await
    }
}
