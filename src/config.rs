use std::{env, net::SocketAddr};

use crate::{Error, Result};

pub fn required_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::ConfigMissingEnv(name.to_string()))
}

#[derive(Clone, Debug)]
pub struct DbConfig {
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// Root credentials. Embedded engines (`mem://`) run without them.
    pub credentials: Option<(String, String)>,
}

impl DbConfig {
    pub fn from_env() -> Result<Self> {
        let credentials = match (env::var("DB_USER"), env::var("DB_PASSWORD")) {
            (Ok(user), Ok(password)) => Some((user, password)),
            _ => None,
        };

        Ok(Self {
            url: required_env("DB_URL")?,
            namespace: required_env("DB_NS")?,
            database: required_env("DB_NAME")?,
            credentials,
        })
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);

        Self { host, port }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| Error::ConfigInvalid(format!("BIND_HOST={} PORT={}", self.host, self.port)))
    }
}
