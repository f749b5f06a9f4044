//! 测试用的影片库服务器，监听 127.0.0.1 随机端口
//!
//! `/api/videos` 返回固定列表，`/api/videos/{id}` 按 id 返回详情，未知 id 返回 404。

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};

#[derive(Clone)]
struct Gallery {
    list: (StatusCode, Value),
    details: Arc<HashMap<String, Value>>,
    hits: Arc<AtomicUsize>,
}

pub struct FakeGallery {
    pub base: String,
    hits: Arc<AtomicUsize>,
}

impl FakeGallery {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub async fn start(list: Value, details: Vec<(&str, Value)>) -> FakeGallery {
    start_with_status(StatusCode::OK, list, details).await
}

pub async fn start_with_status(
    status: StatusCode,
    list: Value,
    details: Vec<(&str, Value)>,
) -> FakeGallery {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = Gallery {
        list: (status, list),
        details: Arc::new(
            details
                .into_iter()
                .map(|(id, v)| (id.to_string(), v))
                .collect(),
        ),
        hits: Arc::clone(&hits),
    };

    let app = Router::new()
        .route("/api/videos", get(list_videos))
        .route("/api/videos/{id}", get(video_detail))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    FakeGallery {
        base: format!("http://{}", addr),
        hits,
    }
}

/// 返回一个已经关闭的端口地址
pub async fn closed_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

async fn list_videos(State(state): State<Gallery>) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    (state.list.0, Json(state.list.1.clone()))
}

async fn video_detail(
    State(state): State<Gallery>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    match state.details.get(&id) {
        Some(detail) => (StatusCode::OK, Json(detail.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))),
    }
}
