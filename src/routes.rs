mod images;

use crate::{config::AppConfig, errors::AppError, state::AppState};
use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderValue, Method, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(images::new())
        .fallback(fallback)
        .layer(middleware::from_fn(reject_head))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(
            // see https://docs.rs/tower-http/latest/tower_http/cors/index.html
            // for more details
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(allow_origin(&config.cors_allow_origins))
                .allow_headers([CONTENT_TYPE]),
        )
        .with_state(state)
}

/// 沒對應到的路徑或 method 一律 404
pub async fn fallback(uri: Uri) -> AppError {
    tracing::debug!("no route for {}", uri);
    AppError::NotFound
}

/// axum 的 get 會順便回應 HEAD，這裡統一當成沒有這個路由
async fn reject_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return fallback(request.uri().clone()).await.into_response();
    }

    next.run(request).await
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() {
        return Any.into();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(origin) => Some(origin),
            Err(err) => {
                tracing::warn!("skip invalid cors origin {}: {}", origin, err);
                None
            }
        })
        .collect();

    origins.into()
}
