use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Map bounds of a destination city, north-east and south-west corners.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, ToSchema)]
pub struct ViewportDto {
    pub ne_lat: f64,
    pub ne_lng: f64,
    pub sw_lat: f64,
    pub sw_lng: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DestCityDto {
    pub id: i32,
    pub trip_id: i32,
    pub city_name: String,
    pub city_place_id: String,
    pub utc_offset_minutes: i32,
    pub viewport: Option<ViewportDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct NewDestCityDto {
    pub city_name: Option<String>,
    pub city_place_id: Option<String>,
    pub utc_offset_minutes: Option<i32>,
    pub viewport: Option<ViewportDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TripDto {
    pub id: i32,
    pub user_id: i32,
    pub trip_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_modified: Option<DateTime<Utc>>,
    pub dest_cities: Vec<DestCityDto>,
}

/// Body for creating a trip. Dates are calendar days, `YYYY-MM-DD`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct CreateTripDto {
    pub trip_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub dest_cities: Option<Vec<NewDestCityDto>>,
}

/// Body for updating a trip. Supplying `dest_cities` replaces the whole set.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct UpdateTripDto {
    pub trip_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub dest_cities: Option<Vec<NewDestCityDto>>,
}
