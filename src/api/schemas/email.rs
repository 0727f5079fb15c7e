use crate::domain::user::{User, UserPatch};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Request body for create and partial update on the email-keyed surface.
#[derive(Debug, Deserialize)]
pub struct UserArgs {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserArgs {
    /// Presence check for create mode. The email is reported first when both
    /// fields are absent.
    ///
    /// # Errors
    /// Returns `AppError::BadRequest` naming the missing field.
    pub fn require(self) -> Result<(String, String)> {
        let email = self.email.ok_or_else(|| AppError::BadRequest("Email is required".to_string()))?;
        let password = self.password.ok_or_else(|| AppError::BadRequest("Password is required".to_string()))?;
        Ok((email, password))
    }

    pub fn into_patch(self) -> UserPatch {
        UserPatch { login: self.email, password: self.password }
    }
}

/// Response body. Field order is part of the contract: id, email, password.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: i64,
    pub email: String,
    pub password: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self { id: user.id, email: user.login, password: user.password }
    }
}
