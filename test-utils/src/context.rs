use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated test environment backed by an in-memory SQLite database.
///
/// The database connection and the session are created on first use and live as long as the
/// context. Sessions are stored in the same in-memory database as the application tables.
pub struct TestContext {
    /// Connection to the in-memory database, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by `SqliteStore`, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context; nothing is connected until first requested.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting to `sqlite::memory:` on first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection shared by the rest of the test
    /// - `Err(TestError::Database)` - Failed to open the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let db = Database::connect("sqlite::memory:").await?;
            self.db = Some(db);
        }

        Ok(self.db.as_ref().expect("database initialized above"))
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// # Arguments
    /// - `stmts` - Statements produced by `TestBuilder::with_table`
    ///
    /// # Returns
    /// - `Ok(())` - All tables created
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, migrating the session store table on first call.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session with a seven day inactivity expiry
    /// - `Err(TestError::Database)` - Failed to open the database or migrate the store
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let db = self.database().await?;

            let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            let session = Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            );
            self.session = Some(session);
        }

        Ok(self.session.as_ref().expect("session initialized above"))
    }

    /// Returns both the database connection and the session.
    ///
    /// Initializes whichever is missing first so the two can be borrowed together.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
