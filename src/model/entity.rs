//! Persisted Beer entity
//!
//! This is the shape the store reads and writes. Handlers never see it;
//! everything crossing the HTTP boundary goes through [`super::mapper`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A beer as held by the store.
///
/// `id`, `created_date` and `last_modified_date` are owned by the store:
/// the id is assigned on first save and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: Option<String>,
    pub beer_name: String,
    pub beer_style: String,
    pub upc: String,
    pub quantity_on_hand: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Beer {
    /// Build an unsaved beer with every client-facing field set.
    pub fn new(
        beer_name: impl Into<String>,
        beer_style: impl Into<String>,
        upc: impl Into<String>,
        quantity_on_hand: i32,
        price: Decimal,
    ) -> Self {
        Self {
            id: None,
            beer_name: beer_name.into(),
            beer_style: beer_style.into(),
            upc: upc.into(),
            quantity_on_hand: Some(quantity_on_hand),
            price: Some(price),
            created_date: None,
            last_modified_date: None,
        }
    }
}

/// Fields the store can be queried by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeerField {
    Name,
    Style,
    Upc,
}

impl BeerField {
    /// Read this field's value off a beer.
    pub fn value_of<'a>(&self, beer: &'a Beer) -> &'a str {
        match self {
            BeerField::Name => &beer.beer_name,
            BeerField::Style => &beer.beer_style,
            BeerField::Upc => &beer.upc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_beer_is_unsaved() {
        let beer = Beer::new("Space Dust", "IPA", "123231", 12, Decimal::TEN);
        assert!(beer.id.is_none());
        assert!(beer.created_date.is_none());
        assert_eq!(beer.quantity_on_hand, Some(12));
    }

    #[test]
    fn test_field_lookup() {
        let beer = Beer::new("Space Dust", "IPA", "123231", 12, Decimal::TEN);
        assert_eq!(BeerField::Name.value_of(&beer), "Space Dust");
        assert_eq!(BeerField::Style.value_of(&beer), "IPA");
        assert_eq!(BeerField::Upc.value_of(&beer), "123231");
    }
}
