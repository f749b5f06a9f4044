//! 应用启动：根组件、路由、全局错误处理和挂载

pub mod document;
pub mod error_sink;
pub mod router;
pub mod views;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::common::config::APP_ANCHOR;
use document::Document;
use error_sink::ErrorSink;
use router::{Route, Router};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("应用已经挂载")]
    AlreadyMounted,

    #[error("应用尚未挂载")]
    NotMounted,

    #[error("挂载点不存在: {0}")]
    AnchorNotFound(String),
}

/// 可渲染的页面组件
#[async_trait]
pub trait Component: Send + Sync {
    async fn render(&self, route: &Route) -> anyhow::Result<String>;
}

pub struct App {
    root: Box<dyn Component>,
    router: Option<Router>,
    error_handler: Option<Arc<dyn ErrorSink>>,
    anchor: Option<String>,
    current: Route,
}

impl App {
    pub fn new<C: Component + 'static>(root: C) -> Self {
        Self {
            root: Box::new(root),
            router: None,
            error_handler: None,
            anchor: None,
            current: Route::Home,
        }
    }

    pub fn use_router(&mut self, router: Router) -> &mut Self {
        self.current = router.initial_route();
        self.router = Some(router);
        self
    }

    /// 注册全局错误处理器，重复注册会替换之前的
    pub fn set_error_handler(&mut self, sink: Arc<dyn ErrorSink>) -> &mut Self {
        if self.error_handler.is_some() {
            warn!("替换已注册的全局错误处理器");
        }
        self.error_handler = Some(sink);
        self
    }

    pub fn has_error_handler(&self) -> bool {
        self.error_handler.is_some()
    }

    pub fn current_route(&self) -> &Route {
        &self.current
    }

    pub fn is_mounted(&self) -> bool {
        self.anchor.is_some()
    }

    pub async fn mount(
        &mut self,
        document: &mut dyn Document,
        anchor: &str,
    ) -> Result<(), AppError> {
        if self.anchor.is_some() {
            return Err(AppError::AlreadyMounted);
        }

        document.mount(anchor)?;
        self.anchor = Some(anchor.to_string());
        info!("应用已挂载到 {}", anchor);

        self.render_current(document).await;
        Ok(())
    }

    /// 切换页面并重新渲染
    pub async fn navigate(
        &mut self,
        document: &mut dyn Document,
        path: &str,
    ) -> Result<(), AppError> {
        if self.anchor.is_none() {
            return Err(AppError::NotMounted);
        }

        self.current = match &self.router {
            Some(router) => router.resolve(path),
            None => Route::NotFound(path.to_string()),
        };
        debug!("跳转到 {:?}", self.current);

        self.render_current(document).await;
        Ok(())
    }

    async fn render_current(&self, document: &mut dyn Document) {
        let Some(anchor) = self.anchor.as_deref() else {
            return;
        };

        match self.root.render(&self.current).await {
            Ok(content) => document.render(anchor, &content),
            Err(err) => self.handle_error(err),
        }
    }

    fn handle_error(&self, err: anyhow::Error) {
        match &self.error_handler {
            Some(sink) => sink.report(&err),
            None => warn!("未注册全局错误处理器，错误被丢弃: {:#}", err),
        }
    }
}

/// 启动流程：创建应用、挂载路由、注册错误处理器、挂载到 `#app`
pub async fn bootstrap<C: Component + 'static>(
    root: C,
    router: Router,
    sink: Arc<dyn ErrorSink>,
    document: &mut dyn Document,
) -> Result<App, AppError> {
    let mut app = App::new(root);
    app.use_router(router).set_error_handler(sink);
    app.mount(document, APP_ANCHOR).await?;
    Ok(app)
}
