//! Trip plan fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::trip_plan;

/// Default plan type.
pub const DEFAULT_PLAN_TYPE: &str = "Activity";

/// Default plan name.
pub const DEFAULT_PLAN_NAME: &str = "Sagrada Familia";

/// Default city the plan takes place in.
pub const DEFAULT_CITY_NAME: &str = "Barcelona";

/// Builds a UTC instant on the hour, panicking on an impossible time.
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Start of the default plan, 2019-04-02 10:00 UTC.
pub fn start_date() -> DateTime<Utc> {
    at(2019, 4, 2, 10)
}

/// Creates a plan entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - trip_id: `1`
/// - plan_type: `"Activity"`
/// - plan_name: `"Sagrada Familia"`
/// - start_date: 2019-04-02 10:00 UTC
/// - end_date: `None`
/// - city_name: `"Barcelona"`
pub fn entity() -> trip_plan::Model {
    entity_builder().build()
}

/// Creates a plan entity builder for customization.
pub fn entity_builder() -> PlanEntityBuilder {
    PlanEntityBuilder {
        model: trip_plan::Model {
            id: 1,
            trip_id: 1,
            plan_type: DEFAULT_PLAN_TYPE.to_string(),
            plan_name: DEFAULT_PLAN_NAME.to_string(),
            plan_place_id: None,
            start_date: start_date(),
            end_date: None,
            description: None,
            city_name: DEFAULT_CITY_NAME.to_string(),
            utc_offset_minutes: 120,
            date_created: at(2019, 3, 1, 0),
            date_modified: None,
        },
    }
}

/// Builder for in-memory plan entity models.
pub struct PlanEntityBuilder {
    model: trip_plan::Model,
}

impl PlanEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn trip_id(mut self, trip_id: i32) -> Self {
        self.model.trip_id = trip_id;
        self
    }

    pub fn plan_type(mut self, plan_type: impl Into<String>) -> Self {
        self.model.plan_type = plan_type.into();
        self
    }

    pub fn plan_name(mut self, plan_name: impl Into<String>) -> Self {
        self.model.plan_name = plan_name.into();
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.model.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: Option<DateTime<Utc>>) -> Self {
        self.model.end_date = end_date;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.model.description = description;
        self
    }

    pub fn build(self) -> trip_plan::Model {
        self.model
    }
}
