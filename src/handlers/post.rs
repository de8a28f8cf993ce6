use std::sync::Arc;

use axum::{
    extract::Path, http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router,
};

use crate::{models::post::PostRegisterDto, AppState, Result};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/post", get(get_all_posts).post(create_post))
        .route(
            "/post/{id}",
            get(get_post_by_id).put(update_post).delete(delete_post),
        )
}

async fn get_all_posts(
    Extension(app_state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse> {
    let posts = app_state.post_service.get_all_posts().await?;
    Ok((StatusCode::OK, Json(posts)))
}

async fn get_post_by_id(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let post = app_state.post_service.get_post_by_id(post_id).await?;
    Ok((StatusCode::OK, Json(post)))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Json(new_post): Json<PostRegisterDto>,
) -> Result<impl IntoResponse> {
    let new_post = app_state.post_service.create_post(new_post).await?;
    Ok((StatusCode::CREATED, Json(new_post)))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Json(updated_post): Json<PostRegisterDto>,
) -> Result<impl IntoResponse> {
    let updated_post = app_state
        .post_service
        .update_post(post_id, updated_post)
        .await?;

    Ok((StatusCode::OK, Json(updated_post)))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<impl IntoResponse> {
    app_state.post_service.delete_post(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
