//! # Beer Domain Model
//!
//! - `Beer`: persisted entity, identity and timestamps owned by the store
//! - `BeerDto`: wire shape, every field optional
//! - `mapper`: the only bridge between the two

pub mod dto;
pub mod entity;
pub mod mapper;

pub use dto::BeerDto;
pub use entity::{Beer, BeerField};
