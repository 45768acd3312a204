use crate::server::{
    data::trip::TripRepository,
    model::trip::{CreateTripParams, DestCityParams, UpdateTripParams, Viewport},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod delete;
mod get_all_by_user;
mod get_by_id;
mod replace_dest_cities;
mod update;
mod update_range;

fn city(name: &str) -> DestCityParams {
    DestCityParams {
        city_name: name.to_string(),
        city_place_id: format!("place-{}", name),
        utc_offset_minutes: 120,
        viewport: None,
    }
}
