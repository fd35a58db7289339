//! Sample catalogue loaded at startup

use rust_decimal::Decimal;
use tracing::info;

use crate::model::Beer;

use super::errors::StoreResult;
use super::BeerStore;

/// The three beers a fresh deployment starts with.
pub fn sample_beers() -> Vec<Beer> {
    vec![
        Beer::new("Galaxy Cat", "Pale Ale", "12356", 122, Decimal::new(1299, 2)),
        Beer::new("Crank", "Pale Ale", "12356222", 392, Decimal::new(1199, 2)),
        Beer::new("Sunshine City", "IPA", "12356", 144, Decimal::new(1399, 2)),
    ]
}

/// Save the sample beers if the store is empty.
///
/// Returns how many beers were written.
pub async fn seed_sample_beers(store: &dyn BeerStore) -> StoreResult<usize> {
    let existing = store.count().await?;
    if existing > 0 {
        info!(existing, "store already populated, skipping sample data");
        return Ok(0);
    }

    let beers = sample_beers();
    let total = beers.len();
    for beer in beers {
        store.save(beer).await?;
    }

    info!(count = total, "loaded sample beers");
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryBeerStore;

    #[tokio::test]
    async fn test_seeds_empty_store() {
        let store = InMemoryBeerStore::new();
        assert_eq!(seed_sample_beers(&store).await.unwrap(), 3);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_skips_populated_store() {
        let store = InMemoryBeerStore::new();
        seed_sample_beers(&store).await.unwrap();

        assert_eq!(seed_sample_beers(&store).await.unwrap(), 0);
        assert_eq!(store.count().await.unwrap(), 3);
    }
}
