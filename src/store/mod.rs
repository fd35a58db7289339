//! # Beer Store
//!
//! The persistence boundary. Anything that can find, save and delete beers
//! without blocking the caller implements [`BeerStore`]; the service only
//! ever holds an `Arc<dyn BeerStore>`.
//!
//! Each single-document operation is atomic. Nothing here spans two
//! operations, so a load-then-save sequence in the service can race with
//! another writer (last write wins).

pub mod errors;
pub mod memory;
pub mod seed;

use async_trait::async_trait;
use futures_util::stream::BoxStream;

use crate::model::{Beer, BeerField};

pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryBeerStore;
pub use seed::seed_sample_beers;

/// Lazy sequence of stored beers.
pub type BeerStream = BoxStream<'static, StoreResult<Beer>>;

/// Asynchronous document collection holding beers.
#[async_trait]
pub trait BeerStore: Send + Sync {
    /// Load one beer by id.
    async fn find(&self, id: &str) -> StoreResult<Option<Beer>>;

    /// Every stored beer, in the store's natural order.
    fn find_all(&self) -> BeerStream;

    /// Beers whose `field` exactly equals `value`.
    fn find_by_field(&self, field: BeerField, value: &str) -> BeerStream;

    /// Insert or replace a beer.
    ///
    /// Assigns an id when absent, sets `created_date` on first save and
    /// refreshes `last_modified_date` on every save.
    async fn save(&self, beer: Beer) -> StoreResult<Beer>;

    /// Remove a beer. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Number of stored beers.
    async fn count(&self) -> StoreResult<usize>;
}
