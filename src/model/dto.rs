//! Wire-facing Beer representation
//!
//! Used as request and response body. Every field is optional so that a
//! PATCH body can tell "not supplied" apart from "supplied".

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Beer as exchanged with HTTP clients.
///
/// JSON `null` and a missing key both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<i32>,

    /// Written and read as a plain JSON number with every digit kept.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl BeerDto {
    /// A fully populated DTO with no identity or timestamps.
    pub fn new(
        beer_name: impl Into<String>,
        beer_style: impl Into<String>,
        upc: impl Into<String>,
        quantity_on_hand: i32,
        price: Decimal,
    ) -> Self {
        Self {
            beer_name: Some(beer_name.into()),
            beer_style: Some(beer_style.into()),
            upc: Some(upc.into()),
            quantity_on_hand: Some(quantity_on_hand),
            price: Some(price),
            ..Default::default()
        }
    }

    /// Drop everything the server owns: id and both timestamps.
    pub fn without_server_fields(mut self) -> Self {
        self.id = None;
        self.created_date = None;
        self.last_modified_date = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_camel_case_wire_names() {
        let dto = BeerDto::new("Space Dust", "IPA", "123231", 12, Decimal::TEN);
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["beerName"], "Space Dust");
        assert_eq!(value["beerStyle"], "IPA");
        assert_eq!(value["quantityOnHand"], 12);
        assert!(value.get("id").is_none());
        assert!(value.get("createdDate").is_none());
    }

    #[test]
    fn test_null_and_missing_are_absent() {
        let dto: BeerDto =
            serde_json::from_value(json!({"beerName": "New", "beerStyle": null})).unwrap();

        assert_eq!(dto.beer_name.as_deref(), Some("New"));
        assert!(dto.beer_style.is_none());
        assert!(dto.price.is_none());
        assert!(dto.quantity_on_hand.is_none());
    }

    #[test]
    fn test_numeric_price_accepted() {
        let dto: BeerDto = serde_json::from_value(json!({"price": 10})).unwrap();
        assert_eq!(dto.price, Some(Decimal::TEN));
    }

    #[test]
    fn test_price_keeps_every_digit() {
        let dto: BeerDto =
            serde_json::from_str(r#"{"price": 12345678901234567.89}"#).unwrap();
        assert_eq!(dto.price, Some(Decimal::from_str("12345678901234567.89").unwrap()));

        let text = serde_json::to_string(&dto).unwrap();
        assert_eq!(text, r#"{"price":12345678901234567.89}"#);
    }

    #[test]
    fn test_price_scale_survives() {
        let dto = BeerDto {
            price: Some(Decimal::new(1300, 2)),
            ..Default::default()
        };
        let text = serde_json::to_string(&dto).unwrap();
        assert_eq!(text, r#"{"price":13.00}"#);

        let back: BeerDto = serde_json::from_str(&text).unwrap();
        assert_eq!(back.price.map(|p| p.scale()), Some(2));
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let result = serde_json::from_value::<BeerDto>(json!({"price": "ten"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_quantity_rejected() {
        let result = serde_json::from_value::<BeerDto>(json!({"quantityOnHand": "lots"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_without_server_fields() {
        let dto = BeerDto {
            id: Some("abc".to_string()),
            created_date: Some(Utc::now()),
            last_modified_date: Some(Utc::now()),
            ..BeerDto::new("Space Dust", "IPA", "123231", 12, Decimal::TEN)
        }
        .without_server_fields();

        assert!(dto.id.is_none());
        assert!(dto.created_date.is_none());
        assert!(dto.last_modified_date.is_none());
        assert_eq!(dto.upc.as_deref(), Some("123231"));
    }
}
