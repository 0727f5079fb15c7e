use crate::domain::user::User;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub mod postgres;
pub mod records;
pub mod sqlite;

/// Persistence seam for the `users` table, object-safe so either backend can
/// sit behind the router.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug {
    async fn fetch(&self, id: i64) -> Result<Option<User>>;
    async fn list(&self) -> Result<Vec<User>>;
    async fn insert(&self, user: &User) -> Result<()>;
    /// Rewrites the full row for `user.id`.
    async fn update(&self, user: &User) -> Result<()>;
    /// Returns `true` if a row was removed.
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// Connects to the database named by `database_url` and ensures the `users`
/// table exists. The URL scheme selects the backend.
///
/// # Errors
/// Fails on an unrecognized scheme or an unreachable database.
pub async fn connect(database_url: &str) -> anyhow::Result<Arc<dyn UserStore>> {
    if database_url.starts_with("sqlite:") {
        Ok(Arc::new(sqlite::SqliteUserStore::connect(database_url).await?))
    } else if database_url.starts_with("postgres:") || database_url.starts_with("postgresql:") {
        Ok(Arc::new(postgres::PgUserStore::connect(database_url).await?))
    } else {
        anyhow::bail!("unsupported database URL scheme: {database_url}")
    }
}
