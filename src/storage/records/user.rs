use crate::domain::user::User;

/// Row shape shared by both backends. SELECTs alias the variant's primary
/// column (`username` or `email`) to `login`, so the marshalling into the
/// domain type stays the same on either side.
#[derive(sqlx::FromRow)]
pub(crate) struct UserRecord {
    pub id: i64,
    pub login: String,
    pub password: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            login: record.login,
            password: record.password,
        }
    }
}
