use tracing::warn;

use crate::common::api::models::video::{RawVideoDetail, VideoDetail, VideoSummary};
use crate::common::config::BaseAddress;

/// 列表项：只替换 `poster`
pub fn rewrite_summary(base: &BaseAddress, video: VideoSummary) -> VideoSummary {
    let poster = base.join(&video.poster);
    VideoSummary { poster, ..video }
}

/// 详情：海报取第一张剧照，视频文件和剧照全部补全为完整URL
///
/// 没有剧照时 `poster` 为 `None`
pub fn rewrite_detail(base: &BaseAddress, raw: RawVideoDetail) -> VideoDetail {
    let fanarts: Vec<String> = raw
        .fanarts
        .unwrap_or_default()
        .iter()
        .map(|img| base.join(img))
        .collect();

    let poster = fanarts.first().cloned();
    if poster.is_none() {
        warn!(
            "影片详情没有剧照，无法生成海报: id={}",
            raw.extra
                .get("id")
                .map(|v| v.to_string())
                .unwrap_or_else(|| "<未知>".to_string())
        );
    }

    let video_file = raw
        .video_file
        .filter(|file| !file.is_empty())
        .map(|file| base.join(&file));

    VideoDetail {
        poster,
        video_file,
        fanarts,
        extra: raw.extra,
    }
}
