// src/models/user.rs

use super::{DataRow, ModelError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Channel a one-time passcode is delivered through
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasscodeRoute {
    Email,
    Phone,
}

/// Registered site user
/// DOCUMENTATION: magic_link and phone_code are credentials and never serialized
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub uuid: Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub login_attempts: u32,
    pub login_date: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub magic_link: Option<String>,
    #[serde(skip)]
    pub phone_code: Option<String>,
    pub passcode_route: PasscodeRoute,
}

#[allow(dead_code)]
impl User {
    pub fn from_row(row: &DataRow) -> Result<Self, ModelError> {
        let passcode_route = match row.raw("passcode_route") {
            None | Some("email") => PasscodeRoute::Email,
            Some("phone") => PasscodeRoute::Phone,
            Some(other) => return Err(ModelError::invalid("passcode_route", other, "passcode route")),
        };

        Ok(User {
            id: row.int("user_id")?,
            uuid: row.uuid("uuid")?,
            email: row.string("email")?,
            name: row.string("name")?,
            phone: row.optional_string("phone"),
            login_attempts: row
                .raw("login_attempts")
                .map(|_| row.unsigned("login_attempts"))
                .transpose()?
                .unwrap_or(0),
            login_date: row.optional_datetime("login_date")?,
            magic_link: row.optional_string("magic_link"),
            phone_code: row.optional_string("phone_code"),
            passcode_route,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_row() -> DataRow {
        DataRow::from_pairs([
            ("user_id", Some("11")),
            ("uuid", Some("9d8c7b6a-5f4e-4d3c-8b2a-1f0e9d8c7b6a")),
            ("email", Some("mail@example.com")),
            ("name", Some("Sam")),
            ("phone", Some("")),
            ("login_attempts", Some("2")),
            ("login_date", Some("2024-02-01 09:00:00")),
            ("magic_link", Some("secret-link")),
            ("phone_code", Some("123456")),
            ("passcode_route", Some("phone")),
        ])
    }

    #[test]
    fn test_user_from_row() {
        let user = User::from_row(&user_row()).unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.login_attempts, 2);
        assert_eq!(user.passcode_route, PasscodeRoute::Phone);
        assert_eq!(user.magic_link.as_deref(), Some("secret-link"));
    }

    #[test]
    fn test_user_serialization_hides_credentials() {
        let user = User::from_row(&user_row()).unwrap();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("magic_link").is_none());
        assert!(json.get("phone_code").is_none());
        assert_eq!(json["passcode_route"], "phone");
    }

    #[test]
    fn test_unknown_passcode_route() {
        let mut row = user_row();
        row.insert("passcode_route", Some("pigeon".to_string()));
        assert!(User::from_row(&row).is_err());
    }
}
