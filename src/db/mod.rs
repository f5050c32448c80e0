pub mod portfolio;
pub mod schema;

use sea_orm::{Database, DatabaseConnection, DbErr};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Hands out one cached database connection for the lifetime of the process.
///
/// The connection is established on first use. After a connection-class
/// failure the caller invalidates it and the next [`get`](Self::get)
/// reconnects.
pub struct ConnectionProvider {
    url: String,
    cached: Mutex<Option<DatabaseConnection>>,
}

impl ConnectionProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            cached: Mutex::new(None),
        }
    }

    /// Returns the cached connection, connecting first if there is none.
    /// A failed attempt leaves nothing cached.
    pub async fn get(&self) -> Result<DatabaseConnection, DbErr> {
        let mut cached = self.cached.lock().await;
        if let Some(conn) = cached.as_ref() {
            return Ok(conn.clone());
        }

        let conn = Database::connect(self.url.as_str()).await?;
        info!("Connected to database");
        *cached = Some(conn.clone());
        Ok(conn)
    }

    /// Drops the cached connection so the next call reconnects.
    pub async fn invalidate(&self) {
        if self.cached.lock().await.take().is_some() {
            warn!("Discarded cached database connection");
        }
    }

    pub async fn is_connected(&self) -> bool {
        self.cached.lock().await.is_some()
    }
}

/// Whether `err` means the connection itself is unusable.
pub fn is_connection_error(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}
