use clap::Parser;

use missav_gallery::common::config::{BaseAddress, DEFAULT_API_BASE, GalleryConfig};

/// 本地影片库浏览器
#[derive(Parser, Debug)]
#[command(name = "gallery")]
#[command(version = "1.0")]
#[command(author = "rpeng252@gmail.com")]
#[command(about = "浏览本地影片库服务器中的影片", long_about = None)]
pub struct Cli {
    /// 影片库服务器地址
    #[arg(long, value_name = "URL")]
    #[arg(default_value = DEFAULT_API_BASE)]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub api_base: BaseAddress,

    /// 初始页面，例如 `/` 或 `/video/ABC-123`
    #[arg(long, value_name = "PATH")]
    #[arg(default_value = "/")]
    pub route: String,

    /// 输出调试日志
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> GalleryConfig {
        GalleryConfig {
            api_base: self.api_base,
            initial_route: self.route,
            verbose: self.verbose,
        }
    }
}
