/// 页面路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// 影片列表 `/`
    Home,
    /// 影片详情 `/video/{id}`
    VideoDetail(String),
    NotFound(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::VideoDetail(id) => format!("/video/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    initial_path: String,
}

impl Router {
    pub fn new() -> Self {
        Self::with_initial_path("/")
    }

    pub fn with_initial_path(path: impl Into<String>) -> Self {
        Self {
            initial_path: path.into(),
        }
    }

    pub fn initial_route(&self) -> Route {
        self.resolve(&self.initial_path)
    }

    pub fn resolve(&self, path: &str) -> Route {
        // 忽略查询参数和锚点
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Route::Home;
        }

        match trimmed.strip_prefix("/video/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::VideoDetail(id.to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
