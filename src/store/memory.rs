//! In-memory Beer store
//!
//! Keeps documents in insertion order behind a `RwLock`. The lock is never
//! held across an `.await`; every operation takes it, does its work and
//! releases it before returning.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use uuid::Uuid;

use crate::model::{Beer, BeerField};

use super::errors::{StoreError, StoreResult};
use super::{BeerStore, BeerStream};

/// Process-local store, also used as the test double.
#[derive(Debug, Default)]
pub struct InMemoryBeerStore {
    beers: RwLock<Vec<Beer>>,
}

impl InMemoryBeerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the current contents, filtered. Listings iterate this copy, so
    /// writes that land mid-listing are not observed.
    fn snapshot<F>(&self, keep: F) -> StoreResult<Vec<Beer>>
    where
        F: Fn(&Beer) -> bool,
    {
        let beers = self
            .beers
            .read()
            .map_err(|_| StoreError::unavailable("Lock poisoned"))?;
        Ok(beers.iter().filter(|b| keep(b)).cloned().collect())
    }

    fn stream_of(result: StoreResult<Vec<Beer>>) -> BeerStream {
        match result {
            Ok(beers) => stream::iter(beers.into_iter().map(Ok)).boxed(),
            Err(e) => stream::once(async move { Err(e) }).boxed(),
        }
    }
}

#[async_trait]
impl BeerStore for InMemoryBeerStore {
    async fn find(&self, id: &str) -> StoreResult<Option<Beer>> {
        let beers = self
            .beers
            .read()
            .map_err(|_| StoreError::unavailable("Lock poisoned"))?;

        Ok(beers
            .iter()
            .find(|b| b.id.as_deref() == Some(id))
            .cloned())
    }

    fn find_all(&self) -> BeerStream {
        Self::stream_of(self.snapshot(|_| true))
    }

    fn find_by_field(&self, field: BeerField, value: &str) -> BeerStream {
        Self::stream_of(self.snapshot(|b| field.value_of(b) == value))
    }

    async fn save(&self, mut beer: Beer) -> StoreResult<Beer> {
        let now = Utc::now();
        let id = beer
            .id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .clone();

        let mut beers = self
            .beers
            .write()
            .map_err(|_| StoreError::unavailable("Lock poisoned"))?;

        match beers.iter_mut().find(|b| b.id.as_deref() == Some(id.as_str())) {
            Some(slot) => {
                beer.created_date = slot.created_date.or(beer.created_date).or(Some(now));
                beer.last_modified_date = Some(now);
                *slot = beer.clone();
            }
            None => {
                beer.created_date = Some(now);
                beer.last_modified_date = Some(now);
                beers.push(beer.clone());
            }
        }

        Ok(beer)
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut beers = self
            .beers
            .write()
            .map_err(|_| StoreError::unavailable("Lock poisoned"))?;

        let before = beers.len();
        beers.retain(|b| b.id.as_deref() != Some(id));
        Ok(beers.len() != before)
    }

    async fn count(&self) -> StoreResult<usize> {
        let beers = self
            .beers
            .read()
            .map_err(|_| StoreError::unavailable("Lock poisoned"))?;
        Ok(beers.len())
    }
}
