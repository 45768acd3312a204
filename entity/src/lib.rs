pub mod prelude;

pub mod plan_detail;
pub mod trip;
pub mod trip_dest_city;
pub mod trip_plan;
pub mod user;
