//! Trip fixtures for creating in-memory test data.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::trip;

/// Default test trip name.
pub const DEFAULT_NAME: &str = "Sunny Mediterranean";

/// Builds a calendar day, panicking on an impossible date.
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// First day of the default trip, 2019-04-01.
pub fn start_date() -> NaiveDate {
    day(2019, 4, 1)
}

/// Last day of the default trip, 2019-04-14.
pub fn end_date() -> NaiveDate {
    day(2019, 4, 14)
}

/// Creates a trip entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - trip_name: `"Sunny Mediterranean"`
/// - start_date / end_date: 2019-04-01 / 2019-04-14
/// - description: `None`
/// - date_modified: `None`
pub fn entity() -> trip::Model {
    entity_builder().build()
}

/// Creates a trip entity builder for customization.
pub fn entity_builder() -> TripEntityBuilder {
    TripEntityBuilder {
        model: trip::Model {
            id: 1,
            user_id: 1,
            trip_name: DEFAULT_NAME.to_string(),
            start_date: start_date(),
            end_date: end_date(),
            description: None,
            date_created: Utc.with_ymd_and_hms(2020, 1, 22, 16, 28, 32).unwrap(),
            date_modified: None,
        },
    }
}

/// Builder for in-memory trip entity models.
pub struct TripEntityBuilder {
    model: trip::Model,
}

impl TripEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.model.user_id = user_id;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.model.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.model.end_date = end_date;
        self
    }

    pub fn build(self) -> trip::Model {
        self.model
    }
}
