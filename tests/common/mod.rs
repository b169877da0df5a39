use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use photo_service::{
    config::AppConfig, repositories::images::ImageStore, routes, state::AppState,
};
use tower::ServiceExt;

/// Router 加上它背後的 store，方便直接檢查狀態
pub struct TestApp {
    pub router: Router,
    pub store: ImageStore,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(ImageStore::seeded())
    }

    pub fn with_store(store: ImageStore) -> Self {
        let router = routes::app(AppState::with_store(store.clone()), &AppConfig::default());
        Self { router, store }
    }

    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// 跟原本的 client 一樣，不帶 content-type
    pub async fn post(&self, uri: &str, body: impl Into<Body>) -> Response {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .body(body.into())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn send(&self, method: &str, uri: &str) -> Response {
        let request = Request::builder()
            .uri(uri)
            .method(method)
            .body(Body::empty())
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn assert_json_content_type(response: &Response) {
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
}

pub fn assert_status(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status);
}
