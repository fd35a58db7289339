//! Entity <-> DTO translation
//!
//! The only place where [`Beer`] and [`BeerDto`] meet. All functions are
//! pure and synchronous.

use super::dto::BeerDto;
use super::entity::Beer;

/// Project a stored beer onto the wire shape.
pub fn to_dto(beer: &Beer) -> BeerDto {
    BeerDto {
        id: beer.id.clone(),
        beer_name: Some(beer.beer_name.clone()),
        beer_style: Some(beer.beer_style.clone()),
        upc: Some(beer.upc.clone()),
        quantity_on_hand: beer.quantity_on_hand,
        price: beer.price,
        created_date: beer.created_date,
        last_modified_date: beer.last_modified_date,
    }
}

/// Build an entity from a DTO, field for field.
///
/// Absent text becomes the empty string; absent numbers stay absent.
pub fn to_entity(dto: BeerDto) -> Beer {
    Beer {
        id: dto.id,
        beer_name: dto.beer_name.unwrap_or_default(),
        beer_style: dto.beer_style.unwrap_or_default(),
        upc: dto.upc.unwrap_or_default(),
        quantity_on_hand: dto.quantity_on_hand,
        price: dto.price,
        created_date: dto.created_date,
        last_modified_date: dto.last_modified_date,
    }
}

/// Full replacement of the client-owned fields.
///
/// `id`, `created_date` and `last_modified_date` of `existing` are kept.
pub fn apply_update(existing: &mut Beer, dto: BeerDto) {
    existing.beer_name = dto.beer_name.unwrap_or_default();
    existing.beer_style = dto.beer_style.unwrap_or_default();
    existing.upc = dto.upc.unwrap_or_default();
    existing.quantity_on_hand = dto.quantity_on_hand;
    existing.price = dto.price;
}

/// Merge only the fields present in `patch` onto `existing`.
pub fn apply_patch(existing: &mut Beer, patch: BeerDto) {
    if let Some(name) = patch.beer_name {
        existing.beer_name = name;
    }
    if let Some(style) = patch.beer_style {
        existing.beer_style = style;
    }
    if let Some(upc) = patch.upc {
        existing.upc = upc;
    }
    if let Some(quantity) = patch.quantity_on_hand {
        existing.quantity_on_hand = Some(quantity);
    }
    if let Some(price) = patch.price {
        existing.price = Some(price);
    }
}
