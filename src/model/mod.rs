//! Request and response bodies exchanged with API clients.

pub mod api;
pub mod plan;
pub mod trip;
pub mod user;
