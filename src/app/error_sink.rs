use tracing::error;

/// 全局错误处理器，只负责记录，不做恢复
pub trait ErrorSink: Send + Sync {
    fn report(&self, err: &anyhow::Error);
}

pub fn format_report(err: &anyhow::Error) -> String {
    format!("Global error: {:#}", err)
}

/// 写入 tracing 日志的默认实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn report(&self, err: &anyhow::Error) {
        error!("{}", format_report(err));
    }
}
