//! Small helpers shared by controllers, services and models.

pub mod parse;
pub mod sanitize;
pub mod validate;
