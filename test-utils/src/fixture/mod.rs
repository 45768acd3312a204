//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests of pure logic (timeline ordering,
//! row denormalization, date-range decisions) and supply the defaults used by factories.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let plan = fixture::plan::entity_builder()
//!     .plan_type("Car Rental")
//!     .end_date(Some(fixture::plan::at(2019, 4, 9, 17)))
//!     .build();
//! ```

pub mod plan;
pub mod plan_detail;
pub mod trip;
pub mod user;

pub use plan::{entity as plan_entity, entity_builder as plan_entity_builder};
pub use plan_detail::entity as plan_detail_entity;
pub use trip::{entity as trip_entity, entity_builder as trip_entity_builder};
