//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation, shorthands for creating entities together with the rows
//! they depend on, and the seeded trips data set used by aggregate tests.

use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a trip owned by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, trip))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::trip::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let trip = crate::factory::trip::create_trip(db, user.id).await?;

    Ok((user, trip))
}

/// Creates a user, a trip and a plan inside that trip.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, trip, plan))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_plan_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::trip::Model,
        entity::trip_plan::Model,
    ),
    DbErr,
> {
    let (user, trip) = create_trip_with_dependencies(db).await?;
    let plan = crate::factory::plan::create_plan(db, trip.id).await?;

    Ok((user, trip, plan))
}

/// Seeds the trips data set with fixed identifiers.
///
/// Inserts two users, three trips and four destination cities:
/// - Trip 1 "Sunny Mediterranean" (user 1), 2019-04-01..2019-04-14, cities 1-3
/// - Trip 2 "Family Trip 2020" (user 1), 2019-04-30..2019-05-05, city 4
/// - Trip 3 "Test Trip 2020" (user 2), 2019-04-30..2019-05-05, no cities
///
/// # Arguments
/// - `db` - Database connection with trip tables created
///
/// # Returns
/// - `Ok(())` - Data set inserted
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_trips_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let created = Utc.with_ymd_and_hms(2020, 1, 22, 16, 28, 32).unwrap();

    for id in 1..=2 {
        entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            user_name: ActiveValue::Set(format!("test-user-{}", id)),
            email: ActiveValue::Set(format!("test-user-{}@test.com", id)),
            password: ActiveValue::Set(fixture::user::DEFAULT_PASSWORD_HASH.to_string()),
            date_created: ActiveValue::Set(created),
        }
        .insert(db)
        .await?;
    }

    let trips = [
        (1, 1, "Sunny Mediterranean", (2019, 4, 1), (2019, 4, 14)),
        (2, 1, "Family Trip 2020", (2019, 4, 30), (2019, 5, 5)),
        (3, 2, "Test Trip 2020", (2019, 4, 30), (2019, 5, 5)),
    ];
    for (id, user_id, name, start, end) in trips {
        entity::trip::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id),
            trip_name: ActiveValue::Set(name.to_string()),
            start_date: ActiveValue::Set(fixture::trip::day(start.0, start.1, start.2)),
            end_date: ActiveValue::Set(fixture::trip::day(end.0, end.1, end.2)),
            description: ActiveValue::Set(None),
            date_created: ActiveValue::Set(created),
            date_modified: ActiveValue::Set(None),
        }
        .insert(db)
        .await?;
    }

    let cities = [
        (1, 1, "Barcelona"),
        (2, 1, "Florence"),
        (3, 1, "Rome"),
        (4, 2, "Tokyo"),
    ];
    for (id, trip_id, name) in cities {
        crate::factory::dest_city::DestCityFactory::new(db, trip_id)
            .id(id)
            .city_name(name)
            .build()
            .await?;
    }

    Ok(())
}
