pub struct ProfileController;

impl ProfileController {
    pub async fn get_profile_placeholder() -> &'static str {
        "Profile route"
    }
}
