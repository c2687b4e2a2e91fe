use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};

use crate::{
    middlewares::mw_auth::Ctx,
    models::post::{
        CommentResponse, CreateCommentRequest, CreatePostRequest, Like, MessageResponse,
        PostResponse,
    },
    services::post_service::PostService,
    AppState, Error,
};

/// A missing or unreadable body counts as an empty one, so the presence
/// check answers instead of the extractor.
fn payload_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::debug!("request body rejected: {}", rejection.body_text());
            T::default()
        }
    }
}

pub struct PostController;

impl PostController {
    pub async fn create_post(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        payload: Result<Json<CreatePostRequest>, JsonRejection>,
    ) -> Result<Json<PostResponse>, Error> {
        let payload = payload_or_default(payload);
        let post = PostService::create_post(&state.db, &ctx.user_id, &ctx.user, payload).await?;

        Ok(Json(post))
    }

    pub async fn get_posts(State(state): State<AppState>) -> Result<Json<Vec<PostResponse>>, Error> {
        let posts = PostService::get_posts(&state.db).await?;

        Ok(Json(posts))
    }

    pub async fn get_post(
        State(state): State<AppState>,
        Path(post_id): Path<String>,
    ) -> Result<Json<PostResponse>, Error> {
        let post = PostService::get_post(&state.db, &post_id).await?;

        Ok(Json(post))
    }

    pub async fn delete_post(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(post_id): Path<String>,
    ) -> Result<Json<MessageResponse>, Error> {
        PostService::delete_post(&state.db, &ctx.user_id, &post_id).await?;

        Ok(Json(MessageResponse {
            msg: "Post removed".to_string(),
        }))
    }

    pub async fn like_post(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(post_id): Path<String>,
    ) -> Result<Json<Vec<Like>>, Error> {
        let likes = PostService::like_post(&state.db, &ctx.user_id, &post_id).await?;

        Ok(Json(likes))
    }

    pub async fn unlike_post(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(post_id): Path<String>,
    ) -> Result<Json<Vec<Like>>, Error> {
        let likes = PostService::unlike_post(&state.db, &ctx.user_id, &post_id).await?;

        Ok(Json(likes))
    }

    pub async fn add_comment(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path(post_id): Path<String>,
        payload: Result<Json<CreateCommentRequest>, JsonRejection>,
    ) -> Result<Json<Vec<CommentResponse>>, Error> {
        let payload = payload_or_default(payload);
        let comments =
            PostService::add_comment(&state.db, &ctx.user_id, &ctx.user, &post_id, payload)
                .await?;

        Ok(Json(comments))
    }

    pub async fn delete_comment(
        State(state): State<AppState>,
        Extension(ctx): Extension<Ctx>,
        Path((post_id, comment_id)): Path<(String, String)>,
    ) -> Result<Json<Vec<CommentResponse>>, Error> {
        let comments =
            PostService::delete_comment(&state.db, &ctx.user_id, &post_id, &comment_id).await?;

        Ok(Json(comments))
    }
}
