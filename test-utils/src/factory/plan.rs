//! Trip plan factory for creating test plan entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating plans inside a trip.
///
/// # Example
///
/// ```rust,ignore
/// let plan = PlanFactory::new(&db, trip.id)
///     .plan_type("Lodging")
///     .end_date(Some(checkout))
///     .build()
///     .await?;
/// ```
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    trip_id: i32,
    plan_type: String,
    plan_name: String,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    description: Option<String>,
    city_name: String,
}

impl<'a> PlanFactory<'a> {
    /// Creates a new PlanFactory with default values.
    ///
    /// Defaults:
    /// - plan_type: `"Activity"`
    /// - plan_name: `"Plan {id}"`
    /// - start_date: `fixture::plan::start_date()`
    /// - end_date: `None`
    /// - city_name: `"Barcelona"`
    pub fn new(db: &'a DatabaseConnection, trip_id: i32) -> Self {
        Self {
            db,
            trip_id,
            plan_type: fixture::plan::DEFAULT_PLAN_TYPE.to_string(),
            plan_name: format!("Plan {}", next_id()),
            start_date: fixture::plan::start_date(),
            end_date: None,
            description: None,
            city_name: fixture::plan::DEFAULT_CITY_NAME.to_string(),
        }
    }

    pub fn plan_type(mut self, plan_type: impl Into<String>) -> Self {
        self.plan_type = plan_type.into();
        self
    }

    pub fn plan_name(mut self, plan_name: impl Into<String>) -> Self {
        self.plan_name = plan_name.into();
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: Option<DateTime<Utc>>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the plan entity into the database.
    ///
    /// The trip's date range is not touched; use the plan service for that.
    pub async fn build(self) -> Result<entity::trip_plan::Model, DbErr> {
        entity::trip_plan::ActiveModel {
            trip_id: ActiveValue::Set(self.trip_id),
            plan_type: ActiveValue::Set(self.plan_type),
            plan_name: ActiveValue::Set(self.plan_name),
            plan_place_id: ActiveValue::Set(None),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            description: ActiveValue::Set(self.description),
            city_name: ActiveValue::Set(self.city_name),
            utc_offset_minutes: ActiveValue::Set(0),
            date_created: ActiveValue::Set(Utc::now()),
            date_modified: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plan with default values for the given trip.
pub async fn create_plan(
    db: &DatabaseConnection,
    trip_id: i32,
) -> Result<entity::trip_plan::Model, DbErr> {
    PlanFactory::new(db, trip_id).build().await
}
