//! Session key-value persistence and the connected user

use crate::core::error::SessionError;
use serde::{Deserialize, Serialize};

/// Key under which the connected user is stored
pub const USER_KEY: &str = "user";

/// Key-value persistence handle, the browser `localStorage` contract
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove_item(&self, key: &str) -> Result<(), SessionError>;

    fn clear(&self) -> Result<(), SessionError>;
}

/// Kind of account connected to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// Value stored under [`USER_KEY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SessionUser {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            user_type: UserType::Employee,
            email: Some(email.into()),
            status: Some("connected".to_string()),
        }
    }

    pub fn is_employee(&self) -> bool {
        self.user_type == UserType::Employee
    }

    /// Read the connected user from a session handle
    pub fn load(storage: &dyn SessionStorage) -> Result<Self, SessionError> {
        let raw = storage.get_item(USER_KEY)?.ok_or(SessionError::Missing)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Store this user in a session handle
    pub fn store(&self, storage: &dyn SessionStorage) -> Result<(), SessionError> {
        let raw = serde_json::to_string(self)?;
        storage.set_item(USER_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_user() {
        let user: SessionUser = serde_json::from_str(r#"{"type":"Employee"}"#).unwrap();
        assert!(user.is_employee());
        assert_eq!(user.email, None);
    }

    #[test]
    fn test_parse_full_user() {
        let user: SessionUser = serde_json::from_str(
            r#"{"type":"Employee","email":"employee@test.tld","status":"connected"}"#,
        )
        .unwrap();
        assert_eq!(user, SessionUser::employee("employee@test.tld"));
    }

    #[test]
    fn test_admin_is_not_employee() {
        let user: SessionUser = serde_json::from_str(r#"{"type":"Admin"}"#).unwrap();
        assert!(!user.is_employee());
    }
}
