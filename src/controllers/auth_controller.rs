use axum::{Extension, Json};

use crate::{middlewares::mw_auth::Ctx, models::user::UserProfile};

pub struct AuthController;

impl AuthController {
    /// Utilisateur connecté, sans champs secrets
    pub async fn get_current_user(Extension(ctx): Extension<Ctx>) -> Json<UserProfile> {
        Json(UserProfile::from(ctx.user))
    }
}
