use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::ContentMedium;
use crate::db::{self, ConnectionProvider, portfolio as portfolio_db};
use crate::error::StoreError;
use crate::models::{Profile, Project, Section, Skill, StoredContent};

/// Content kept in the `portfolio_*` tables. Each collection write runs
/// delete-all and insert-all inside one transaction.
pub struct DatabaseMedium {
    provider: Arc<ConnectionProvider>,
}

impl DatabaseMedium {
    pub fn new(provider: Arc<ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Passes `result` through, dropping the cached connection if it failed
    /// because the connection is broken.
    async fn settle<T>(&self, result: Result<T, StoreError>) -> Result<T, StoreError> {
        let broken = match &result {
            Err(StoreError::Database(e)) if db::is_connection_error(e) => {
                warn!(error = %e, "Database connection failed");
                true
            }
            _ => false,
        };
        if broken {
            self.provider.invalidate().await;
        }
        result
    }
}

#[async_trait]
impl ContentMedium for DatabaseMedium {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn read(&self) -> Result<StoredContent, StoreError> {
        let conn = self.provider.get().await?;
        let result = portfolio_db::fetch_content(&conn).await;
        self.settle(result).await
    }

    async fn write_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        let conn = self.provider.get().await?;
        let result = portfolio_db::replace_profile(&conn, profile).await;
        self.settle(result).await
    }

    async fn write_sections(&self, sections: &[Section]) -> Result<(), StoreError> {
        let conn = self.provider.get().await?;
        let result = portfolio_db::replace_sections(&conn, sections).await;
        self.settle(result).await
    }

    async fn write_skills(&self, skills: &[Skill]) -> Result<(), StoreError> {
        let conn = self.provider.get().await?;
        let result = portfolio_db::replace_skills(&conn, skills).await;
        self.settle(result).await
    }

    async fn write_projects(&self, projects: &[Project]) -> Result<(), StoreError> {
        let conn = self.provider.get().await?;
        let result = portfolio_db::replace_projects(&conn, projects).await;
        self.settle(result).await
    }

    async fn write_seed(&self, profile: &Profile, sections: &[Section]) -> Result<(), StoreError> {
        let conn = self.provider.get().await?;
        let result = portfolio_db::seed(&conn, profile, sections).await;
        self.settle(result).await
    }
}
