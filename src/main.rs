use std::sync::Arc;

use clap::Parser;
use tracing::{debug, info};

use missav_gallery::app::{
    self, document::TerminalDocument, error_sink::TracingErrorSink, router::Router,
    views::GalleryView,
};
use missav_gallery::catalog::VideoCatalog;
use missav_gallery::common::api::client::GalleryClient;
use missav_gallery::{log_error, log_info, log_success};

mod cli;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<()> {
    // 解析命令行参数
    let config = cli::Cli::parse().into_config();

    // 初始化日志
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();
    debug!("运行配置: {:?}", config);

    log_info!("影片库地址: {}", config.api_base);
    let client = GalleryClient::new()?;
    let catalog = VideoCatalog::new(client, config.api_base.clone());

    // 启动应用
    let mut document = TerminalDocument::new();
    let app = app::bootstrap(
        GalleryView::new(catalog),
        Router::with_initial_path(config.initial_route.clone()),
        Arc::new(TracingErrorSink),
        &mut document,
    )
    .await
    .map_err(|e| {
        log_error!("启动失败: {}", e);
        e
    })?;

    info!("当前页面: {:?}", app.current_route());
    log_success!("已显示 {}", app.current_route().path());
    Ok(())
}
