//! Trip domain models and parameters.
//!
//! A trip is an aggregate: the trip row plus the destination cities it owns. The cities are
//! always replaced as a whole, never patched one by one.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::trip::{
        CreateTripDto, DestCityDto, NewDestCityDto, TripDto, UpdateTripDto, ViewportDto,
    },
    server::{
        error::AppError,
        util::{
            sanitize::{clean_optional, clean_text},
            validate::{require_any, require_fields, require_ordered, RequiredField},
        },
    },
};

/// Map bounds of a destination city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub ne_lat: f64,
    pub ne_lng: f64,
    pub sw_lat: f64,
    pub sw_lng: f64,
}

impl Viewport {
    /// Rebuilds a viewport from its four nullable columns; any missing corner means none.
    fn from_columns(
        ne_lat: Option<f64>,
        ne_lng: Option<f64>,
        sw_lat: Option<f64>,
        sw_lng: Option<f64>,
    ) -> Option<Self> {
        Some(Self {
            ne_lat: ne_lat?,
            ne_lng: ne_lng?,
            sw_lat: sw_lat?,
            sw_lng: sw_lng?,
        })
    }

    fn from_dto(dto: ViewportDto) -> Self {
        Self {
            ne_lat: dto.ne_lat,
            ne_lng: dto.ne_lng,
            sw_lat: dto.sw_lat,
            sw_lng: dto.sw_lng,
        }
    }

    fn into_dto(self) -> ViewportDto {
        ViewportDto {
            ne_lat: self.ne_lat,
            ne_lng: self.ne_lng,
            sw_lat: self.sw_lat,
            sw_lng: self.sw_lng,
        }
    }
}

/// City a trip visits, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DestCity {
    pub id: i32,
    pub trip_id: i32,
    pub city_name: String,
    pub city_place_id: String,
    pub utc_offset_minutes: i32,
    pub viewport: Option<Viewport>,
}

impl DestCity {
    pub fn from_entity(entity: entity::trip_dest_city::Model) -> Self {
        Self {
            id: entity.id,
            trip_id: entity.trip_id,
            city_name: entity.city_name,
            city_place_id: entity.city_place_id,
            utc_offset_minutes: entity.utc_offset_minutes,
            viewport: Viewport::from_columns(
                entity.ne_lat,
                entity.ne_lng,
                entity.sw_lat,
                entity.sw_lng,
            ),
        }
    }

    pub fn into_dto(self) -> DestCityDto {
        DestCityDto {
            id: self.id,
            trip_id: self.trip_id,
            city_name: self.city_name,
            city_place_id: self.city_place_id,
            utc_offset_minutes: self.utc_offset_minutes,
            viewport: self.viewport.map(Viewport::into_dto),
        }
    }
}

/// Trip with its destination cities.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub user_id: i32,
    pub trip_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_modified: Option<DateTime<Utc>>,
    pub dest_cities: Vec<DestCity>,
}

impl Trip {
    /// Converts a trip row and its city rows to the domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::trip::Model,
        dest_cities: Vec<entity::trip_dest_city::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            trip_name: entity.trip_name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            description: entity.description,
            date_created: entity.date_created,
            date_modified: entity.date_modified,
            dest_cities: dest_cities.into_iter().map(DestCity::from_entity).collect(),
        }
    }

    /// Converts the trip to a DTO, sanitizing free-text fields on the way out.
    pub fn into_dto(self) -> TripDto {
        TripDto {
            id: self.id,
            user_id: self.user_id,
            trip_name: clean_text(&self.trip_name),
            start_date: self.start_date,
            end_date: self.end_date,
            description: clean_optional(self.description.as_deref()),
            date_created: self.date_created,
            date_modified: self.date_modified,
            dest_cities: self
                .dest_cities
                .into_iter()
                .map(DestCity::into_dto)
                .collect(),
        }
    }
}

/// Validated destination city input.
#[derive(Debug, Clone, PartialEq)]
pub struct DestCityParams {
    pub city_name: String,
    pub city_place_id: String,
    pub utc_offset_minutes: i32,
    pub viewport: Option<Viewport>,
}

impl DestCityParams {
    fn from_dtos(dtos: Vec<NewDestCityDto>) -> Result<Vec<Self>, AppError> {
        dtos.into_iter().map(Self::from_dto).collect()
    }

    fn from_dto(dto: NewDestCityDto) -> Result<Self, AppError> {
        require_fields(
            &dto,
            &[
                RequiredField::new("city_name", |d: &NewDestCityDto| {
                    d.city_name.as_deref().is_some_and(|v| !v.is_empty())
                }),
                RequiredField::new("city_place_id", |d: &NewDestCityDto| {
                    d.city_place_id.as_deref().is_some_and(|v| !v.is_empty())
                }),
                RequiredField::new("utc_offset_minutes", |d: &NewDestCityDto| {
                    d.utc_offset_minutes.is_some()
                }),
            ],
        )?;

        Ok(Self {
            city_name: dto.city_name.unwrap_or_default(),
            city_place_id: dto.city_place_id.unwrap_or_default(),
            utc_offset_minutes: dto.utc_offset_minutes.unwrap_or_default(),
            viewport: dto.viewport.map(Viewport::from_dto),
        })
    }
}

/// Parameters for creating a trip together with its destination cities.
#[derive(Debug, Clone)]
pub struct CreateTripParams {
    pub user_id: i32,
    pub trip_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub dest_cities: Vec<DestCityParams>,
}

impl CreateTripParams {
    /// Validates a creation body for the given owner.
    ///
    /// # Returns
    /// - `Ok(CreateTripParams)` - Complete body with `start_date <= end_date` and at least one city
    /// - `Err(AppError::Validation)` - Missing field or reversed range
    pub fn from_dto(user_id: i32, dto: CreateTripDto) -> Result<Self, AppError> {
        require_fields(
            &dto,
            &[
                RequiredField::new("trip_name", |d: &CreateTripDto| d.trip_name.is_some()),
                RequiredField::new("start_date", |d: &CreateTripDto| d.start_date.is_some()),
                RequiredField::new("end_date", |d: &CreateTripDto| d.end_date.is_some()),
                RequiredField::new("dest_cities", |d: &CreateTripDto| {
                    d.dest_cities.as_ref().is_some_and(|c| !c.is_empty())
                }),
            ],
        )?;

        let start_date = dto.start_date.unwrap_or_default();
        let end_date = dto.end_date.unwrap_or_default();
        require_ordered(&start_date, &end_date)?;

        Ok(Self {
            user_id,
            trip_name: dto.trip_name.unwrap_or_default(),
            start_date,
            end_date,
            description: dto.description,
            dest_cities: DestCityParams::from_dtos(dto.dest_cities.unwrap_or_default())?,
        })
    }
}

/// Parameters for updating a trip.
///
/// Only provided fields change. `dest_cities`, if provided, replaces every existing city.
#[derive(Debug, Clone)]
pub struct UpdateTripParams {
    pub id: i32,
    pub trip_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub dest_cities: Option<Vec<DestCityParams>>,
}

impl UpdateTripParams {
    /// Validates an update body.
    ///
    /// Range ordering against the stored dates is checked by the service, which knows them.
    pub fn from_dto(id: i32, dto: UpdateTripDto) -> Result<Self, AppError> {
        require_any(
            &[
                "trip_name",
                "start_date",
                "end_date",
                "description",
                "dest_cities",
            ],
            dto.trip_name.is_some()
                || dto.start_date.is_some()
                || dto.end_date.is_some()
                || dto.description.is_some()
                || dto.dest_cities.is_some(),
        )?;

        if let Some(cities) = &dto.dest_cities {
            if cities.is_empty() {
                return Err(AppError::Validation(
                    "Missing 'dest_cities' in request body".to_string(),
                ));
            }
        }

        Ok(Self {
            id,
            trip_name: dto.trip_name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            description: dto.description,
            dest_cities: dto
                .dest_cities
                .map(DestCityParams::from_dtos)
                .transpose()?,
        })
    }
}
