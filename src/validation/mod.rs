//! # Beer Validation
//!
//! Synchronous constraint checking run before every create, full update and
//! (post-merge) partial update.

pub mod validator;

pub use validator::{BeerValidator, Violation, MAX_TEXT_LEN};
