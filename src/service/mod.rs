//! # Beer Resource Service
//!
//! Entity-shaped CRUD on top of a [`crate::store::BeerStore`], with
//! validation on every write path.

pub mod beer_service;
pub mod errors;

pub use beer_service::{BeerDtoStream, BeerService};
pub use errors::{ServiceError, ServiceResult};
