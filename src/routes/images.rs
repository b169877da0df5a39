use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    errors::AppError,
    routes::fallback,
    state::AppState,
    structs::images::{parse_count, parse_id, Image, ListParams, NewImage},
};

pub fn new() -> Router<AppState> {
    Router::new()
        .route(
            "/images",
            get(get_images).post(create_image).fallback(fallback),
        )
        .route("/images/{id}", get(get_image).fallback(fallback))
}

/// 取 images 清單，可用 count 限制筆數
async fn get_images(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Image>>, AppError> {
    let Query(params) = query.map_err(|err| AppError::InvalidCount(err.body_text()))?;
    let count = parse_count(params.count.as_deref())?;

    let images = state.get_images().list(count).await;
    tracing::debug!("list images count={:?} returned={}", count, images.len());

    Ok(Json(images))
}

/// 取特定 image
async fn get_image(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Image>, AppError> {
    let Path(id) = path.map_err(|err| AppError::InvalidId(err.body_text()))?;
    let id = parse_id(&id)?;

    let image = state
        .get_images()
        .get_by_id(id)
        .await
        .ok_or(AppError::ImageNotFound(id))?;

    Ok(Json(image))
}

/// 新增 image 到清單最前面，不檢查 content-type
async fn create_image(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Image>), AppError> {
    let new_image = NewImage::parse(&body)?;

    let image = state.get_images().prepend(new_image.into()).await;
    tracing::info!("image created id={} author={}", image.id, image.author);

    Ok((StatusCode::CREATED, Json(image)))
}
