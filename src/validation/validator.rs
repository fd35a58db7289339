//! Beer constraint checks
//!
//! Rules:
//! - `beerName` and `beerStyle` present, non-empty, at most 255 characters
//! - `upc` present and non-empty
//! - `quantityOnHand` and `price` present and not negative
//!
//! An empty string counts as missing. Validation never mutates the DTO and
//! performs no I/O.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::BeerDto;

/// Longest accepted `beerName` / `beerStyle`, in characters.
pub const MAX_TEXT_LEN: usize = 255;

/// A single field-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn must_not_be_blank(field: &str) -> Self {
        Self::new(field, "must not be blank")
    }

    fn must_not_be_null(field: &str) -> Self {
        Self::new(field, "must not be null")
    }

    fn too_long(field: &str) -> Self {
        Self::new(field, format!("size must be at most {}", MAX_TEXT_LEN))
    }

    fn negative(field: &str) -> Self {
        Self::new(field, "must not be negative")
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Stateless validator for [`BeerDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BeerValidator;

impl BeerValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check every rule; returns an empty list for a valid DTO.
    pub fn validate(&self, dto: &BeerDto) -> Vec<Violation> {
        let mut violations = Vec::new();

        check_bounded_text(&mut violations, "beerName", dto.beer_name.as_deref());
        check_bounded_text(&mut violations, "beerStyle", dto.beer_style.as_deref());

        if is_blank(dto.upc.as_deref()) {
            violations.push(Violation::must_not_be_blank("upc"));
        }

        match dto.quantity_on_hand {
            None => violations.push(Violation::must_not_be_null("quantityOnHand")),
            Some(q) if q < 0 => violations.push(Violation::negative("quantityOnHand")),
            Some(_) => {}
        }

        match dto.price {
            None => violations.push(Violation::must_not_be_null("price")),
            Some(p) if p < Decimal::ZERO => violations.push(Violation::negative("price")),
            Some(_) => {}
        }

        violations
    }

    /// Convenience wrapper: `Ok(())` or the full violation list.
    pub fn check(&self, dto: &BeerDto) -> Result<(), Vec<Violation>> {
        let violations = self.validate(dto);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

fn check_bounded_text(violations: &mut Vec<Violation>, field: &str, value: Option<&str>) {
    match value {
        None | Some("") => violations.push(Violation::must_not_be_blank(field)),
        Some(text) if text.chars().count() > MAX_TEXT_LEN => {
            violations.push(Violation::too_long(field))
        }
        Some(_) => {}
    }
}
