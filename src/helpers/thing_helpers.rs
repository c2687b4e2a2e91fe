use lazy_regex::regex_is_match;
use surrealdb::sql::Thing;
use uuid::Uuid;

/// Parse un ID depuis différents formats possibles
pub fn parse_id_part(id: &str) -> &str {
    // "tb:id" -> "id"
    match id.split_once(':') {
        Some((_, id_part)) => id_part,
        None => id,
    }
}

/// Ids are generated keys; anything else can't be stored and is treated as missing.
pub fn is_valid_id(id: &str) -> bool {
    regex_is_match!(r"^[A-Za-z0-9_-]{1,64}$", id)
}

/// Record key without the table prefix or escaping brackets.
pub fn thing_key(thing: &Thing) -> String {
    thing.id.to_raw()
}

pub fn new_record_key() -> String {
    Uuid::new_v4().simple().to_string()
}
