use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_plan_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements in the order they will be executed.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The statement is generated with SQLite syntax, including foreign keys for every
    /// `belongs_to` relation, so tables must be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for trip operations.
    ///
    /// Tables added in order: `User`, `Trip`, `TripDestCity`.
    pub fn with_trip_tables(self) -> Self {
        self.with_table(User)
            .with_table(Trip)
            .with_table(TripDestCity)
    }

    /// Adds the tables required for plan operations.
    ///
    /// Equivalent to `with_trip_tables()` followed by `TripPlan` and `PlanDetail`. Trip
    /// deletion also needs these tables since it removes the trip's plans.
    pub fn with_plan_tables(self) -> Self {
        self.with_trip_tables()
            .with_table(TripPlan)
            .with_table(PlanDetail)
    }

    /// Builds the test context and creates every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
