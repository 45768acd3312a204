//! Trip data repository for database operations.
//!
//! Trips and their destination cities are read with two queries and merged by trip id. Writes
//! take any `ConnectionTrait`, so the service can run several of them inside one transaction.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::denormalize::attach_children,
    model::trip::{CreateTripParams, DestCityParams, Trip, UpdateTripParams},
};

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every trip owned by a user with its destination cities.
    ///
    /// Trips are ordered by start date then id; cities keep insertion order.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the trips
    ///
    /// # Returns
    /// - `Ok(Vec<Trip>)` - Owned trips, empty if the user has none
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_all_by_user(&self, user_id: i32) -> Result<Vec<Trip>, DbErr> {
        let trips = entity::prelude::Trip::find()
            .filter(entity::trip::Column::UserId.eq(user_id))
            .order_by_asc(entity::trip::Column::StartDate)
            .order_by_asc(entity::trip::Column::Id)
            .all(self.db)
            .await?;

        if trips.is_empty() {
            return Ok(Vec::new());
        }

        let trip_ids: Vec<i32> = trips.iter().map(|t| t.id).collect();
        let cities = entity::prelude::TripDestCity::find()
            .filter(entity::trip_dest_city::Column::TripId.is_in(trip_ids))
            .order_by_asc(entity::trip_dest_city::Column::Id)
            .all(self.db)
            .await?;

        Ok(attach_children(trips, |t| t.id, cities, |c| c.trip_id)
            .into_iter()
            .map(|nested| Trip::from_entity(nested.parent, nested.children))
            .collect())
    }

    /// Gets a trip by id with its destination cities.
    ///
    /// # Returns
    /// - `Ok(Some(Trip))` - Trip found
    /// - `Ok(None)` - No trip with this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Trip>, DbErr> {
        let Some(trip) = self.find_entity(id).await? else {
            return Ok(None);
        };

        let cities = self.get_dest_cities(id).await?;

        Ok(Some(Trip::from_entity(trip, cities)))
    }

    /// Gets the bare trip row, without destination cities.
    pub async fn find_entity(&self, id: i32) -> Result<Option<entity::trip::Model>, DbErr> {
        entity::prelude::Trip::find_by_id(id).one(self.db).await
    }

    /// Inserts a trip followed by its destination cities.
    ///
    /// # Returns
    /// - `Ok(Trip)` - The created trip with the cities as inserted
    /// - `Err(DbErr)` - Database error on any insert
    pub async fn create(&self, params: CreateTripParams) -> Result<Trip, DbErr> {
        let trip = entity::trip::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            trip_name: ActiveValue::Set(params.trip_name),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            description: ActiveValue::Set(params.description),
            date_created: ActiveValue::Set(Utc::now()),
            date_modified: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let cities = self.insert_dest_cities(trip.id, params.dest_cities).await?;

        Ok(Trip::from_entity(trip, cities))
    }

    /// Updates the scalar columns supplied in `params` and stamps `date_modified`.
    ///
    /// Destination cities are left untouched; see `replace_dest_cities`.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated trip row
    /// - `Ok(None)` - Trip not found
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        params: &UpdateTripParams,
    ) -> Result<Option<entity::trip::Model>, DbErr> {
        let Some(trip) = self.find_entity(params.id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::trip::ActiveModel = trip.into();

        if let Some(trip_name) = &params.trip_name {
            active_model.trip_name = ActiveValue::Set(trip_name.clone());
        }
        if let Some(start_date) = params.start_date {
            active_model.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active_model.end_date = ActiveValue::Set(end_date);
        }
        if let Some(description) = &params.description {
            active_model.description = ActiveValue::Set(Some(description.clone()));
        }
        active_model.date_modified = ActiveValue::Set(Some(Utc::now()));

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Writes a new date range and stamps `date_modified`.
    pub async fn update_range(
        &self,
        trip: entity::trip::Model,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<entity::trip::Model, DbErr> {
        let mut active_model: entity::trip::ActiveModel = trip.into();
        active_model.start_date = ActiveValue::Set(start_date);
        active_model.end_date = ActiveValue::Set(end_date);
        active_model.date_modified = ActiveValue::Set(Some(Utc::now()));

        active_model.update(self.db).await
    }

    /// Gets a trip's destination cities in insertion order.
    pub async fn get_dest_cities(
        &self,
        trip_id: i32,
    ) -> Result<Vec<entity::trip_dest_city::Model>, DbErr> {
        entity::prelude::TripDestCity::find()
            .filter(entity::trip_dest_city::Column::TripId.eq(trip_id))
            .order_by_asc(entity::trip_dest_city::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes every destination city of a trip, then inserts the replacement set.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - The inserted cities in order
    /// - `Err(DbErr)` - Database error on delete or insert
    pub async fn replace_dest_cities(
        &self,
        trip_id: i32,
        cities: Vec<DestCityParams>,
    ) -> Result<Vec<entity::trip_dest_city::Model>, DbErr> {
        self.delete_dest_cities(trip_id).await?;

        self.insert_dest_cities(trip_id, cities).await
    }

    /// Deletes every destination city of a trip.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_dest_cities(&self, trip_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::TripDestCity::delete_many()
            .filter(entity::trip_dest_city::Column::TripId.eq(trip_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the trip row.
    ///
    /// Fails with a foreign key violation while any city or plan still references it.
    ///
    /// # Returns
    /// - `Ok(true)` - Trip deleted
    /// - `Ok(false)` - No trip with this id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Trip::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn insert_dest_cities(
        &self,
        trip_id: i32,
        cities: Vec<DestCityParams>,
    ) -> Result<Vec<entity::trip_dest_city::Model>, DbErr> {
        let mut inserted = Vec::with_capacity(cities.len());

        for city in cities {
            let (ne_lat, ne_lng, sw_lat, sw_lng) = match city.viewport {
                Some(v) => (Some(v.ne_lat), Some(v.ne_lng), Some(v.sw_lat), Some(v.sw_lng)),
                None => (None, None, None, None),
            };

            let model = entity::trip_dest_city::ActiveModel {
                trip_id: ActiveValue::Set(trip_id),
                city_name: ActiveValue::Set(city.city_name),
                city_place_id: ActiveValue::Set(city.city_place_id),
                utc_offset_minutes: ActiveValue::Set(city.utc_offset_minutes),
                ne_lat: ActiveValue::Set(ne_lat),
                ne_lng: ActiveValue::Set(ne_lng),
                sw_lat: ActiveValue::Set(sw_lat),
                sw_lng: ActiveValue::Set(sw_lng),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            inserted.push(model);
        }

        Ok(inserted)
    }
}
