//! Database repository layer for all domain entities.
//!
//! Repositories handle the CRUD operations of each aggregate. They use SeaORM entity models
//! internally and return domain models to the service layer. Every repository is generic over
//! `ConnectionTrait`, so the same code runs against the pool or inside a transaction.

pub mod denormalize;
pub mod plan;
pub mod trip;
pub mod user;

#[cfg(test)]
mod test;
