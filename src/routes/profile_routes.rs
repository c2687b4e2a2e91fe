use axum::{routing::get, Router};

use crate::{controllers::profile_controller::ProfileController, AppState};

pub struct ProfileRoutes;

impl ProfileRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/", get(ProfileController::get_profile_placeholder))
    }
}
