pub use sea_orm_migration::prelude::*;

mod m20190401_000001_create_users_table;
mod m20190401_000002_create_trips_table;
mod m20190401_000003_create_trip_dest_cities_table;
mod m20190402_000004_create_trip_plans_table;
mod m20190402_000005_create_plan_details_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20190401_000001_create_users_table::Migration),
            Box::new(m20190401_000002_create_trips_table::Migration),
            Box::new(m20190401_000003_create_trip_dest_cities_table::Migration),
            Box::new(m20190402_000004_create_trip_plans_table::Migration),
            Box::new(m20190402_000005_create_plan_details_table::Migration),
        ]
    }
}
