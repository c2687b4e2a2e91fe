use surrealdb::{
    engine::any::{self, Any},
    opt::auth::Root,
    Surreal,
};

use crate::{config::DbConfig, Result};

pub const USER_TABLE: &str = "user";
pub const POST_TABLE: &str = "post";

pub async fn connect(config: &DbConfig) -> Result<Surreal<Any>> {
    tracing::info!("Connecting to database at: {}", config.url);

    let db = any::connect(&config.url).await?;

    if let Some((username, password)) = &config.credentials {
        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;
    }
    db.use_ns(&config.namespace).use_db(&config.database).await?;

    tracing::info!("Database connected successfully!");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_in_memory() {
        let config = DbConfig {
            url: "mem://".to_string(),
            namespace: "test".to_string(),
            database: "test".to_string(),
            credentials: None,
        };

        let db = connect(&config).await.unwrap();
        let mut response = db.query("RETURN 1 + 1").await.unwrap();
        let value: Option<i64> = response.take(0).unwrap();
        assert_eq!(value, Some(2));
    }
}
