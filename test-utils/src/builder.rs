use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are generated from SeaORM entities using the SQLite backend and created in the
/// order they were added, so parents must be added before the tables that reference them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_conversation_tables()
///     .with_error_report_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed by `build()`, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the CREATE TABLE statement from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table a conversation thread is stored in.
    ///
    /// Tables are added in dependency order:
    /// - ConversationRoom
    /// - ConversationTurn
    /// - ReferenceDocument
    /// - FollowUpQuestion
    pub fn with_conversation_tables(self) -> Self {
        self.with_table(ConversationRoom)
            .with_table(ConversationTurn)
            .with_table(ReferenceDocument)
            .with_table(FollowUpQuestion)
    }

    /// Adds the error report tables.
    ///
    /// Error reports carry no foreign keys, so they can be created with or without the
    /// conversation tables.
    pub fn with_error_report_tables(self) -> Self {
        self.with_table(ErrorReport).with_table(ErrorReportCode)
    }

    /// Connects to a fresh in-memory SQLite database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database ready for use
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
