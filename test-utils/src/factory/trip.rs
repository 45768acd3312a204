//! Trip factory for creating test trip entities.

use crate::{factory::helpers::next_id, fixture};
use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// let trip = TripFactory::new(&db, user.id)
///     .trip_name("Sunny Mediterranean")
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    trip_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    description: Option<String>,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - trip_name: `"Trip {id}"`
    /// - start_date / end_date: `fixture::trip::start_date()` / `fixture::trip::end_date()`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            trip_name: format!("Trip {}", next_id()),
            start_date: fixture::trip::start_date(),
            end_date: fixture::trip::end_date(),
            description: None,
        }
    }

    pub fn trip_name(mut self, trip_name: impl Into<String>) -> Self {
        self.trip_name = trip_name.into();
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the trip entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trip::Model)` - Created trip entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            trip_name: ActiveValue::Set(self.trip_name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            description: ActiveValue::Set(self.description),
            date_created: ActiveValue::Set(Utc::now()),
            date_modified: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip with default values for the given user.
pub async fn create_trip(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, user_id).build().await
}
