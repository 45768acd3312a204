pub use super::plan_detail::Entity as PlanDetail;
pub use super::trip::Entity as Trip;
pub use super::trip_dest_city::Entity as TripDestCity;
pub use super::trip_plan::Entity as TripPlan;
pub use super::user::Entity as User;
