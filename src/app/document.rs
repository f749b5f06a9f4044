use tracing::debug;

use super::AppError;
use crate::common::config::APP_ANCHOR;
use crate::common::logger::PrettyLogger;

/// 承载应用的宿主文档
pub trait Document: Send {
    /// 绑定挂载点，挂载点不存在时返回错误
    fn mount(&mut self, anchor: &str) -> Result<(), AppError>;

    /// 将渲染结果写入挂载点
    fn render(&mut self, anchor: &str, content: &str);
}

/// 终端宿主，只有一个挂载点 `#app`，内容输出到 stdout
#[derive(Debug, Default)]
pub struct TerminalDocument {
    mounted: Option<String>,
}

impl TerminalDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted_anchor(&self) -> Option<&str> {
        self.mounted.as_deref()
    }
}

impl Document for TerminalDocument {
    fn mount(&mut self, anchor: &str) -> Result<(), AppError> {
        if anchor != APP_ANCHOR {
            return Err(AppError::AnchorNotFound(anchor.to_string()));
        }
        debug!("挂载到 {}", anchor);
        self.mounted = Some(anchor.to_string());
        Ok(())
    }

    fn render(&mut self, anchor: &str, content: &str) {
        PrettyLogger::separator();
        debug!("渲染 {} ({} 字节)", anchor, content.len());
        PrettyLogger::content(content);
        PrettyLogger::separator();
    }
}
