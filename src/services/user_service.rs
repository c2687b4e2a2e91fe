use surrealdb::{engine::any::Any, Surreal};

use crate::{
    db::USER_TABLE,
    helpers::thing_helpers::{is_valid_id, parse_id_part},
    models::user::UserRecord,
    Error,
};

pub struct UserService;

impl UserService {
    pub async fn find_user(db: &Surreal<Any>, user_id: &str) -> Result<Option<UserRecord>, Error> {
        let user_id = parse_id_part(user_id);
        if !is_valid_id(user_id) {
            return Ok(None);
        }

        let user: Option<UserRecord> = db
            .query("SELECT * FROM type::thing($tb, $id)")
            .bind(("tb", USER_TABLE))
            .bind(("id", user_id.to_string()))
            .await?
            .take(0)?;

        Ok(user)
    }
}
