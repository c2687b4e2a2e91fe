use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

use crate::helpers::thing_helpers::thing_key;

/// Stored user document. Users are registered by the identity service;
/// any secret fields it keeps on the record are ignored here.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub date: Datetime,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub date: DateTime<Utc>,
}

impl From<UserRecord> for UserProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.as_ref().map(thing_key).unwrap_or_default(),
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            date: user.date.0,
        }
    }
}
