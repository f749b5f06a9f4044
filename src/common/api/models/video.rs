use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 列表接口中的单个影片
///
/// 除 `poster` 之外的字段原样透传
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub poster: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoSummary {
    pub fn id(&self) -> Option<&str> {
        self.extra.get("id").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }
}

/// 详情接口的原始返回
#[derive(Debug, Clone, Deserialize)]
pub struct RawVideoDetail {
    // 服务器自带的 poster 不会透传，海报取自第一张剧照
    #[serde(default, rename = "poster")]
    pub server_poster: Option<Value>,

    #[serde(default)]
    pub fanarts: Option<Vec<String>>,

    #[serde(default, rename = "videoFile")]
    pub video_file: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 处理后的影片详情，所有路径都是完整URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub poster: Option<String>,

    #[serde(rename = "videoFile")]
    pub video_file: Option<String>,

    pub fanarts: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VideoDetail {
    pub fn id(&self) -> Option<&str> {
        self.extra.get("id").and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.extra.get("title").and_then(Value::as_str)
    }

    pub fn release_date(&self) -> Option<&str> {
        self.extra.get("releaseDate").and_then(Value::as_str)
    }
}
