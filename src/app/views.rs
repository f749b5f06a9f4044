use std::fmt::Write;

use anyhow::Context;
use async_trait::async_trait;

use super::Component;
use super::router::Route;
use crate::catalog::CatalogSource;
use crate::common::api::models::video::{VideoDetail, VideoSummary};

/// 根组件：影片列表和影片详情两个页面
pub struct GalleryView<S> {
    catalog: S,
}

impl<S: CatalogSource> GalleryView<S> {
    pub fn new(catalog: S) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<S: CatalogSource> Component for GalleryView<S> {
    async fn render(&self, route: &Route) -> anyhow::Result<String> {
        match route {
            Route::Home => {
                let videos = self
                    .catalog
                    .get_video_list()
                    .await
                    .context("加载影片列表失败")?;
                Ok(render_list(&videos))
            }
            Route::VideoDetail(id) => {
                let detail = self
                    .catalog
                    .get_video_detail(id)
                    .await
                    .with_context(|| format!("加载影片详情失败: {}", id))?;
                Ok(render_detail(id, &detail))
            }
            Route::NotFound(path) => Ok(format!("页面不存在: {}\n", path)),
        }
    }
}

pub fn render_list(videos: &[VideoSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "影片列表 ({})", videos.len());

    for video in videos {
        let title = video.title().or(video.id()).unwrap_or("<无标题>");
        match video.id() {
            Some(id) => {
                let _ = writeln!(out, "[{}] {}", id, title);
            }
            None => {
                let _ = writeln!(out, "{}", title);
            }
        }
        let _ = writeln!(out, "    海报: {}", video.poster);
    }

    out
}

pub fn render_detail(id: &str, detail: &VideoDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", detail.title().unwrap_or(id));
    let _ = writeln!(out, "编号: {}", detail.id().unwrap_or(id));
    if let Some(date) = detail.release_date() {
        let _ = writeln!(out, "发行日期: {}", date);
    }
    let _ = writeln!(out, "海报: {}", detail.poster.as_deref().unwrap_or("(无)"));
    let _ = writeln!(out, "视频: {}", detail.video_file.as_deref().unwrap_or("(无)"));
    let _ = writeln!(out, "剧照 ({}):", detail.fanarts.len());
    for img in &detail.fanarts {
        let _ = writeln!(out, "  {}", img);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::api::error::ApiError;
    use serde_json::json;

    struct FixedCatalog;

    #[async_trait]
    impl CatalogSource for FixedCatalog {
        async fn get_video_list(&self) -> Result<Vec<VideoSummary>, ApiError> {
            Ok(vec![
                serde_json::from_value(json!({
                    "id": "ABC-123",
                    "title": "第一部",
                    "poster": "http://h/file/ABC-123/ABC-123-poster.jpg"
                }))
                .unwrap(),
                serde_json::from_value(json!({"poster": "http://h/p.jpg"})).unwrap(),
            ])
        }

        async fn get_video_detail(&self, id: &str) -> Result<VideoDetail, ApiError> {
            if id == "missing" {
                return Err(ApiError::MalformedResponse("空响应".to_string()));
            }
            Ok(serde_json::from_value(json!({
                "id": id,
                "title": "第一部",
                "releaseDate": "2024-01-01",
                "poster": "http://h/f1.jpg",
                "videoFile": null,
                "fanarts": ["http://h/f1.jpg", "http://h/f2.jpg"]
            }))
            .unwrap())
        }
    }

    #[tokio::test]
    async fn test_render_home() {
        let view = GalleryView::new(FixedCatalog);
        let out = view.render(&Route::Home).await.unwrap();

        assert_eq!(
            out,
            "影片列表 (2)\n\
             [ABC-123] 第一部\n    海报: http://h/file/ABC-123/ABC-123-poster.jpg\n\
             <无标题>\n    海报: http://h/p.jpg\n"
        );
    }

    #[tokio::test]
    async fn test_render_detail() {
        let view = GalleryView::new(FixedCatalog);
        let out = view
            .render(&Route::VideoDetail("ABC-123".to_string()))
            .await
            .unwrap();

        assert!(out.starts_with("第一部\n编号: ABC-123\n发行日期: 2024-01-01\n"));
        assert!(out.contains("海报: http://h/f1.jpg\n"));
        assert!(out.contains("视频: (无)\n"));
        assert!(out.ends_with("剧照 (2):\n  http://h/f1.jpg\n  http://h/f2.jpg\n"));
    }

    #[tokio::test]
    async fn test_render_detail_error_has_context() {
        let view = GalleryView::new(FixedCatalog);
        let err = view
            .render(&Route::VideoDetail("missing".to_string()))
            .await
            .unwrap_err();

        assert_eq!(format!("{:#}", err), "加载影片详情失败: missing: 响应解析失败: 空响应");
        assert!(err.downcast_ref::<ApiError>().is_some());
    }

    #[tokio::test]
    async fn test_render_not_found() {
        let view = GalleryView::new(FixedCatalog);
        let out = view
            .render(&Route::NotFound("/about".to_string()))
            .await
            .unwrap();
        assert_eq!(out, "页面不存在: /about\n");
    }
}
