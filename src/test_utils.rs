use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use surrealdb::{
    engine::any::{connect, Any},
    sql::Datetime,
    Surreal,
};
use uuid::Uuid;

use crate::{
    auth::token_service::{AuthConfig, Claims},
    db::USER_TABLE,
    models::user::UserRecord,
    AppState,
};

pub const TEST_WEBSITE_URL: &str = "http://localhost:3000";

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        website_url: TEST_WEBSITE_URL.to_string(),
        jwt_algorithm: Algorithm::HS256,
    }
}

/// Same claims shape as the identity service issues.
pub fn create_token_with(sub: &str, config: &AuthConfig, tweak: impl FnOnce(&mut Claims)) -> String {
    let iat = Utc::now();
    let exp = iat + Duration::minutes(60);

    let mut claims = Claims {
        sub: sub.to_string(),
        exp: exp.timestamp() as usize,
        iat: iat.timestamp() as usize,
        nbf: iat.timestamp() as usize,
        iss: config.website_url.to_string(),
        aud: config.website_url.to_string(),
        jti: Uuid::new_v4().to_string(),
    };
    tweak(&mut claims);

    encode(
        &Header::new(config.jwt_algorithm),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .unwrap()
}

pub fn create_token(sub: &str, config: &AuthConfig) -> String {
    create_token_with(sub, config, |_| {})
}

pub async fn setup_db() -> Surreal<Any> {
    let db = connect("mem://").await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    db
}

pub async fn seed_user(db: &Surreal<Any>, user_id: &str, name: &str) -> UserRecord {
    let user = UserRecord {
        id: None,
        name: name.to_string(),
        email: format!("{user_id}@example.com"),
        avatar: Some(format!("//www.gravatar.com/avatar/{user_id}")),
        date: Datetime::from(Utc::now()),
    };

    let created: Option<UserRecord> = db
        .query("CREATE type::thing($tb, $id) CONTENT $user")
        .bind(("tb", USER_TABLE))
        .bind(("id", user_id.to_string()))
        .bind(("user", user))
        .await
        .unwrap()
        .take(0)
        .unwrap();

    created.expect("Test user creation failed")
}

pub async fn test_state() -> AppState {
    AppState {
        db: setup_db().await,
        auth_config: auth_config(),
    }
}
