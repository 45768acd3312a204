//! HTTP handlers.
//!
//! Controllers check access, convert DTOs to validated parameters, call a service and convert
//! the result back to a DTO. Each handler carries its OpenAPI description.

pub mod auth;
pub mod plan;
pub mod trip;
pub mod user;
