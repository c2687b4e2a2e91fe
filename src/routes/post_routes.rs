use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{controllers::post_controller::PostController, AppState};

pub struct PostRoutes;

impl PostRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new()
            .route(
                "/",
                post(PostController::create_post).get(PostController::get_posts),
            )
            .route(
                "/{post_id}",
                get(PostController::get_post).delete(PostController::delete_post),
            )
            .route("/like/{post_id}", put(PostController::like_post))
            .route("/unlike/{post_id}", put(PostController::unlike_post))
            .route("/comment/{post_id}", post(PostController::add_comment))
            .route(
                "/comment/{post_id}/{comment_id}",
                delete(PostController::delete_comment),
            )
    }
}
