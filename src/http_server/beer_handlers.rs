//! Beer HTTP Handlers
//!
//! One handler per operation. Each extracts its parameters, calls the
//! service and turns the outcome into a status code:
//!
//! | Operation | Success | Missing id | Bad body |
//! |-----------|---------|------------|----------|
//! | list      | 200 + array | -      | -        |
//! | get       | 200 + body  | 404    | -        |
//! | create    | 201 + `Location` | - | 400      |
//! | update    | 204     | 404        | 400      |
//! | patch     | 204     | 404        | 400      |
//! | delete    | 204     | 404        | -        |

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use futures_util::TryStreamExt;
use serde::Deserialize;

use crate::model::BeerDto;
use crate::service::BeerService;

use super::errors::{ApiError, ApiResult};
use super::routes::BEER_PATH;

// ==================
// Shared State
// ==================

/// State shared by every beer handler
pub struct BeerState {
    pub service: BeerService,
}

impl BeerState {
    pub fn new(service: BeerService) -> Self {
        Self { service }
    }
}

pub type SharedBeerState = Arc<BeerState>;

// ==================
// Request Types
// ==================

/// Query string accepted by the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListBeersQuery {
    #[serde(rename = "beerStyle")]
    pub beer_style: Option<String>,
}

/// URI of a single beer, used for the `Location` header.
pub fn beer_location(id: &str) -> String {
    format!("{}/{}", BEER_PATH, id)
}

// ==================
// Handlers
// ==================

pub async fn list_beers(
    State(state): State<SharedBeerState>,
    query: Result<Query<ListBeersQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<BeerDto>>> {
    let Query(query) = query?;

    let beers = state
        .service
        .list(query.beer_style.as_deref())
        .try_collect::<Vec<_>>()
        .await?;

    Ok(Json(beers))
}

pub async fn get_beer(
    State(state): State<SharedBeerState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BeerDto>> {
    state
        .service
        .get_by_id(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_beer(
    State(state): State<SharedBeerState>,
    body: Result<Json<BeerDto>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(dto) = body?;

    let saved = state.service.create(dto).await?;
    let id = saved
        .id
        .ok_or_else(|| ApiError::Internal("store returned a beer without an id".to_string()))?;

    Ok((StatusCode::CREATED, [(header::LOCATION, beer_location(&id))]))
}

pub async fn update_beer(
    State(state): State<SharedBeerState>,
    Path(id): Path<String>,
    body: Result<Json<BeerDto>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(dto) = body?;

    state
        .service
        .full_update(&id, dto)
        .await?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::NotFound)
}

pub async fn patch_beer(
    State(state): State<SharedBeerState>,
    Path(id): Path<String>,
    body: Result<Json<BeerDto>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(patch) = body?;

    state
        .service
        .partial_update(&id, patch)
        .await?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::NotFound)
}

pub async fn delete_beer(
    State(state): State<SharedBeerState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.service.delete(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
