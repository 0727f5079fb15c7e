use crate::domain::user::{User, UserPatch};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Request body for create and partial update. Both fields deserialize as
/// optional; create enforces presence through [`UserArgs::require`] so a
/// missing field is reported by name before any persistence access.
#[derive(Debug, Deserialize)]
pub struct UserArgs {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserArgs {
    /// Presence check for create mode. The username is reported first when
    /// both fields are absent.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` naming the missing field.
    pub fn require(self) -> Result<(String, String)> {
        let username = self.username.ok_or_else(|| AppError::BadRequest("Username is required".to_string()))?;
        let password = self.password.ok_or_else(|| AppError::BadRequest("Password is required".to_string()))?;
        Ok((username, password))
    }

    pub fn into_patch(self) -> UserPatch {
        UserPatch { login: self.username, password: self.password }
    }
}

/// Response body. Field order is part of the contract: id, username,
/// password. The stored password is returned verbatim; there is no hashing
/// layer anywhere in this service.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self { id: user.id, username: user.login, password: user.password }
    }
}
