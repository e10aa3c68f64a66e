//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_ingest_tables: bool,

    // Database fixtures to insert
    venues: Vec<(i32, String, Option<String>)>, // (id, name, spelling)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    ///
    /// # Returns
    /// - `TestBuilder` - A new builder instance ready for configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_ingest_tables: false,
            venues: Vec::new(),
        }
    }

    /// Add every table the ingestion pipeline writes to.
    ///
    /// Tables are created in foreign key order: Venue, Series, Event, EventResource, Hybrid,
    /// AvConfig, OtherHardware, Recording, Action and QcItem.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_ingest_tables(mut self) -> Self {
        self.include_ingest_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```no_run
    /// use opsboard_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), opsboard_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Venue)
    ///     .with_table(Series)
    ///     .with_table(Event)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a venue into the database.
    ///
    /// # Arguments
    /// - `id` - Venue id
    /// - `name` - Canonical venue name
    /// - `spelling` - Optional alternate spelling used by upstream
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_venue(mut self, id: i32, name: &str, spelling: Option<&str>) -> Self {
        self.venues
            .push((id, name.to_string(), spelling.map(str::to_string)));
        self
    }

    /// Build the test context.
    ///
    /// Creates the in-memory database, executes the queued table statements and inserts the
    /// queued fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_ingest_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Venue),
                schema.create_table_from_entity(entity::prelude::Series),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::EventResource),
                schema.create_table_from_entity(entity::prelude::Hybrid),
                schema.create_table_from_entity(entity::prelude::AvConfig),
                schema.create_table_from_entity(entity::prelude::OtherHardware),
                schema.create_table_from_entity(entity::prelude::Recording),
                schema.create_table_from_entity(entity::prelude::Action),
                schema.create_table_from_entity(entity::prelude::QcItem),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (id, name, spelling) in self.venues {
            setup.ingest().insert_venue(id, &name, spelling.as_deref()).await?;
        }

        Ok(setup)
    }
}
