//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `*Factory` builder and a `create_*` shorthand.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let trip = factory::create_trip(&db, user.id).await?;
//!
//! // Or everything a plan needs in one call
//! let (user, trip, plan) = factory::helpers::create_plan_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use test_utils::factory;
//!
//! let trip = factory::trip::TripFactory::new(&db, user.id)
//!     .trip_name("Sunny Mediterranean")
//!     .start_date(NaiveDate::from_ymd_opt(2019, 4, 1).unwrap())
//!     .end_date(NaiveDate::from_ymd_opt(2019, 4, 14).unwrap())
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `trip` - Create trip entities
//! - `dest_city` - Create destination city entities
//! - `plan` - Create trip plan entities
//! - `plan_detail` - Create plan detail entities
//! - `helpers` - Entities with their dependencies, and the seeded trips data set

pub mod dest_city;
pub mod helpers;
pub mod plan;
pub mod plan_detail;
pub mod trip;
pub mod user;

pub use dest_city::create_dest_city;
pub use plan::create_plan;
pub use plan_detail::create_plan_detail;
pub use trip::create_trip;
pub use user::create_user;
