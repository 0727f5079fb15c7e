/// A stored user row in domain form.
///
/// `login` carries whichever primary field the running variant exposes
/// (username or email); the wire name is applied at the schema layer and the
/// column name inside each store's SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub password: String,
}

/// Field-wise changes carried by a partial update.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub login: Option<String>,
    pub password: Option<String>,
}

impl User {
    /// Applies the supplied fields, leaving the rest untouched.
    ///
    /// Empty strings count as absent, so a record created with non-empty
    /// fields stays non-empty across updates.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(login) = patch.login.filter(|v| !v.is_empty()) {
            self.login = login;
        }
        if let Some(password) = patch.password.filter(|v| !v.is_empty()) {
            self.password = password;
        }
    }
}
