//! The user record exchanged with the remote service.

use serde::{Deserialize, Deserializer, Serialize};

/// One user as returned by the detail endpoint and sent back on update.
///
/// Updates are full overwrites: every field is serialized, so a field left
/// empty here is written empty on the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub last_booking: String,
    /// Counters travel as strings; the server is allowed to send numbers.
    #[serde(default, deserialize_with = "string_or_number")]
    pub nights: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub books: String,
    #[serde(default)]
    pub roles: String,
    #[serde(default)]
    pub create_at: String,
    #[serde(default)]
    pub update_at: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
