//! Business logic layer.
//!
//! Services orchestrate repositories into whole operations: aggregate writes in a single
//! transaction, trip range synchronization after plan writes, and timeline ordering for reads.
//! They return domain models and `AppError`, leaving DTO conversion to controllers.

pub mod auth;
pub mod plan;
pub mod timeline;
pub mod trip;
pub mod trip_range;
pub mod user;

#[cfg(test)]
mod test;
