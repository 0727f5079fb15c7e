#![allow(dead_code)]

use roster_server::api::{self, AppState};
use roster_server::config::ApiVariant;
use roster_server::storage::UserStore;
use roster_server::storage::sqlite::SqliteUserStore;
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("roster_server=debug".parse().unwrap())
            .add_directive("sqlx=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// A fully wired server on an ephemeral port, plus a client and a handle on
/// the store for direct state assertions.
pub struct TestApp {
    pub server_url: String,
    pub client: reqwest::Client,
    pub users: Arc<dyn UserStore>,
    _db_dir: Option<TempDir>,
}

impl TestApp {
    /// Spawns the username-keyed surface over a fresh temp SQLite database.
    pub async fn spawn() -> Self {
        Self::spawn_variant(ApiVariant::Username).await
    }

    /// Spawns the selected surface over a fresh temp SQLite database.
    pub async fn spawn_variant(variant: ApiVariant) -> Self {
        setup_tracing();

        let db_dir = tempfile::tempdir().expect("Failed to create temp dir for sqlite database");
        let database_url = format!("sqlite://{}", db_dir.path().join("users.db").display());
        let store = SqliteUserStore::connect(&database_url).await.expect("Failed to open sqlite database");

        Self::serve(Arc::new(store), variant, Some(db_dir)).await
    }

    /// Spawns the selected surface over a caller-provided store (used by the
    /// PostgreSQL suite).
    pub async fn with_store(users: Arc<dyn UserStore>, variant: ApiVariant) -> Self {
        setup_tracing();
        Self::serve(users, variant, None).await
    }

    async fn serve(users: Arc<dyn UserStore>, variant: ApiVariant, db_dir: Option<TempDir>) -> Self {
        let state = AppState { users: Arc::clone(&users) };
        let app = api::app_router(state, variant);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            server_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            users,
            _db_dir: db_dir,
        }
    }

    pub fn user_url(&self, id: i64) -> String {
        format!("{}/user/{id}", self.server_url)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.server_url)
    }
}
