//! Destination city factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating destination cities attached to a trip.
pub struct DestCityFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    trip_id: i32,
    city_name: String,
    city_place_id: String,
    utc_offset_minutes: i32,
}

impl<'a> DestCityFactory<'a> {
    /// Creates a new DestCityFactory with default values.
    ///
    /// Defaults:
    /// - city_name: `"City {id}"`
    /// - city_place_id: `"place_{id}"`
    /// - utc_offset_minutes: `0`
    pub fn new(db: &'a DatabaseConnection, trip_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            id: None,
            trip_id,
            city_name: format!("City {}", id),
            city_place_id: format!("place_{}", id),
            utc_offset_minutes: 0,
        }
    }

    /// Forces the primary key, for data sets that refer to rows by id.
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn city_name(mut self, city_name: impl Into<String>) -> Self {
        self.city_name = city_name.into();
        self
    }

    pub fn utc_offset_minutes(mut self, utc_offset_minutes: i32) -> Self {
        self.utc_offset_minutes = utc_offset_minutes;
        self
    }

    /// Builds and inserts the destination city into the database.
    pub async fn build(self) -> Result<entity::trip_dest_city::Model, DbErr> {
        entity::trip_dest_city::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            trip_id: ActiveValue::Set(self.trip_id),
            city_name: ActiveValue::Set(self.city_name),
            city_place_id: ActiveValue::Set(self.city_place_id),
            utc_offset_minutes: ActiveValue::Set(self.utc_offset_minutes),
            ne_lat: ActiveValue::Set(None),
            ne_lng: ActiveValue::Set(None),
            sw_lat: ActiveValue::Set(None),
            sw_lng: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a destination city with default values for the given trip.
pub async fn create_dest_city(
    db: &DatabaseConnection,
    trip_id: i32,
) -> Result<entity::trip_dest_city::Model, DbErr> {
    DestCityFactory::new(db, trip_id).build().await
}
