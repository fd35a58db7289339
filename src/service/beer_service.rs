//! Beer resource service
//!
//! Orchestrates validation, mapping and store access. Every operation speaks
//! `BeerDto`; the entity shape never leaves this module and the store.
//!
//! Suspension points are the store calls only. Validation and mapping run
//! inline on the caller's task.

use std::sync::Arc;

use futures_util::stream::{BoxStream, StreamExt, TryStreamExt};
use tracing::{debug, error, info};

use crate::model::{mapper, BeerDto, BeerField};
use crate::store::BeerStore;
use crate::validation::BeerValidator;

use super::errors::{ServiceError, ServiceResult};

/// Lazy sequence of DTOs produced by [`BeerService::list`].
pub type BeerDtoStream = BoxStream<'static, ServiceResult<BeerDto>>;

/// CRUD operations over the Beer collection.
#[derive(Clone)]
pub struct BeerService {
    store: Arc<dyn BeerStore>,
    validator: BeerValidator,
}

impl BeerService {
    pub fn new(store: Arc<dyn BeerStore>) -> Self {
        Self {
            store,
            validator: BeerValidator::new(),
        }
    }

    /// All beers, or only those whose style equals `style` exactly.
    pub fn list(&self, style: Option<&str>) -> BeerDtoStream {
        let beers = match style {
            Some(style) => self.store.find_by_field(BeerField::Style, style),
            None => self.store.find_all(),
        };

        beers
            .map_ok(|beer| mapper::to_dto(&beer))
            .map_err(ServiceError::from)
            .boxed()
    }

    /// Look up one beer. `None` when no beer has this id.
    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Option<BeerDto>> {
        let beer = self.store.find(id).await.map_err(log_store_error)?;
        Ok(beer.as_ref().map(mapper::to_dto))
    }

    /// Validate and persist a new beer.
    ///
    /// Client-supplied id and timestamps are discarded; the store assigns them.
    pub async fn create(&self, dto: BeerDto) -> ServiceResult<BeerDto> {
        self.ensure_valid(&dto)?;

        let entity = mapper::to_entity(dto.without_server_fields());
        let saved = self.store.save(entity).await.map_err(log_store_error)?;

        info!(id = ?saved.id, name = %saved.beer_name, "created beer");
        Ok(mapper::to_dto(&saved))
    }

    /// Replace every client-owned field of an existing beer.
    ///
    /// `None` when the beer does not exist; nothing is written in that case
    /// or when validation fails.
    ///
    /// The lookup runs before validation, so an unknown id yields `None`
    /// (404) even when `dto` is invalid.
    pub async fn full_update(&self, id: &str, dto: BeerDto) -> ServiceResult<Option<BeerDto>> {
        let Some(mut existing) = self.store.find(id).await.map_err(log_store_error)? else {
            debug!(id, "update target not found");
            return Ok(None);
        };

        self.ensure_valid(&dto)?;

        mapper::apply_update(&mut existing, dto);
        let saved = self.store.save(existing).await.map_err(log_store_error)?;

        info!(id, "updated beer");
        Ok(Some(mapper::to_dto(&saved)))
    }

    /// Merge the supplied fields onto an existing beer.
    ///
    /// Fields absent from `patch` keep their stored values. The merged result
    /// is validated as a whole before anything is written, so an unknown id
    /// yields `None` whatever the patch contains.
    pub async fn partial_update(
        &self,
        id: &str,
        patch: BeerDto,
    ) -> ServiceResult<Option<BeerDto>> {
        let Some(mut existing) = self.store.find(id).await.map_err(log_store_error)? else {
            debug!(id, "patch target not found");
            return Ok(None);
        };

        mapper::apply_patch(&mut existing, patch);
        self.ensure_valid(&mapper::to_dto(&existing))?;

        let saved = self.store.save(existing).await.map_err(log_store_error)?;

        info!(id, "patched beer");
        Ok(Some(mapper::to_dto(&saved)))
    }

    /// Remove a beer. `false` when there was nothing to remove.
    pub async fn delete(&self, id: &str) -> ServiceResult<bool> {
        let removed = self.store.delete(id).await.map_err(log_store_error)?;
        if removed {
            info!(id, "deleted beer");
        } else {
            debug!(id, "delete target not found");
        }
        Ok(removed)
    }

    fn ensure_valid(&self, dto: &BeerDto) -> ServiceResult<()> {
        self.validator.check(dto).map_err(|violations| {
            debug!(count = violations.len(), "rejected beer");
            ServiceError::ValidationFailed(violations)
        })
    }
}

fn log_store_error(err: crate::store::StoreError) -> ServiceError {
    error!(error = %err, "store operation failed");
    ServiceError::Store(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryBeerStore;
    use rust_decimal::Decimal;

    fn service() -> (Arc<InMemoryBeerStore>, BeerService) {
        let store = Arc::new(InMemoryBeerStore::new());
        let service = BeerService::new(store.clone());
        (store, service)
    }

    fn test_beer() -> BeerDto {
        BeerDto::new("Space Dust", "IPA", "123231", 12, Decimal::TEN)
    }

    async fn collect(service: &BeerService, style: Option<&str>) -> Vec<BeerDto> {
        service.list(style).try_collect().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (_, service) = service();
        let saved = service.create(test_beer()).await.unwrap();

        let id = saved.id.clone().unwrap();
        let fetched = service.get_by_id(&id).await.unwrap().unwrap();

        assert_eq!(fetched, saved);
        assert_eq!(
            fetched.without_server_fields(),
            test_beer(),
            "only server-owned fields differ from the input"
        );
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let (_, service) = service();
        let dto = BeerDto {
            id: Some("client-chosen".to_string()),
            ..test_beer()
        };

        let saved = service.create(dto).await.unwrap();
        assert_ne!(saved.id.as_deref(), Some("client-chosen"));
        assert!(service.get_by_id("client-chosen").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_invalid_writes_nothing() {
        let (store, service) = service();
        let dto = BeerDto {
            beer_name: Some(String::new()),
            ..test_beer()
        };

        let err = service.create(dto).await.unwrap_err();
        assert!(matches!(err, ServiceError::ValidationFailed(_)));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_each_missing_field() {
        let (store, service) = service();
        let broken = [
            BeerDto { beer_name: None, ..test_beer() },
            BeerDto { beer_style: None, ..test_beer() },
            BeerDto { upc: None, ..test_beer() },
            BeerDto { quantity_on_hand: None, ..test_beer() },
            BeerDto { price: None, ..test_beer() },
            BeerDto { beer_style: Some(String::new()), ..test_beer() },
        ];

        for dto in broken {
            let err = service.create(dto).await.unwrap_err();
            assert_eq!(err.violations().map(|v| v.len()), Some(1));
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let (_, service) = service();
        assert!(service.get_by_id("99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_style() {
        let (_, service) = service();
        service.create(test_beer()).await.unwrap();
        service
            .create(BeerDto::new("Crank", "Pale Ale", "1", 1, Decimal::ONE))
            .await
            .unwrap();
        service
            .create(BeerDto::new("Tester", "TEST", "2", 2, Decimal::ONE))
            .await
            .unwrap();

        assert_eq!(collect(&service, None).await.len(), 3);

        let only = collect(&service, Some("TEST")).await;
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].beer_style.as_deref(), Some("TEST"));

        assert!(collect(&service, Some("Stout")).await.is_empty());
    }

    #[tokio::test]
    async fn test_full_update_overwrites_fields() {
        let (_, service) = service();
        let saved = service.create(test_beer()).await.unwrap();
        let id = saved.id.clone().unwrap();

        let updated = service
            .full_update(&id, BeerDto::new("New", "Lager", "777", 3, Decimal::ONE))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.created_date, saved.created_date);
        assert_eq!(updated.beer_name.as_deref(), Some("New"));
        assert_eq!(updated.beer_style.as_deref(), Some("Lager"));
        assert_eq!(updated.quantity_on_hand, Some(3));
    }

    #[tokio::test]
    async fn test_full_update_invalid_leaves_entity() {
        let (_, service) = service();
        let saved = service.create(test_beer()).await.unwrap();
        let id = saved.id.clone().unwrap();

        let dto = BeerDto {
            beer_style: Some(String::new()),
            ..test_beer()
        };
        let err = service.full_update(&id, dto).await.unwrap_err();
        assert!(matches!(err, ServiceError::ValidationFailed(_)));

        let fetched = service.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched.beer_style.as_deref(), Some("IPA"));
    }

    #[tokio::test]
    async fn test_partial_update_changes_only_name() {
        let (_, service) = service();
        let saved = service.create(test_beer()).await.unwrap();
        let id = saved.id.clone().unwrap();

        let patch = BeerDto {
            beer_name: Some("New".to_string()),
            ..Default::default()
        };
        service.partial_update(&id, patch).await.unwrap().unwrap();

        let fetched = service.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched.beer_name.as_deref(), Some("New"));
        assert_eq!(fetched.beer_style.as_deref(), Some("IPA"));
        assert_eq!(fetched.upc.as_deref(), Some("123231"));
        assert_eq!(fetched.quantity_on_hand, Some(12));
        assert_eq!(fetched.price, Some(Decimal::TEN));
    }

    #[tokio::test]
    async fn test_partial_update_validates_merged_result() {
        let (_, service) = service();
        let saved = service.create(test_beer()).await.unwrap();
        let id = saved.id.clone().unwrap();

        let patch = BeerDto {
            beer_style: Some(String::new()),
            ..Default::default()
        };
        let err = service.partial_update(&id, patch).await.unwrap_err();
        assert_eq!(
            err.violations().map(|v| v[0].field.clone()),
            Some("beerStyle".to_string())
        );

        let fetched = service.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(fetched.beer_style.as_deref(), Some("IPA"));
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_even_with_invalid_body() {
        let (store, service) = service();

        assert!(service
            .full_update("99", BeerDto::default())
            .await
            .unwrap()
            .is_none());
        assert!(service
            .partial_update("99", BeerDto { beer_style: Some(String::new()), ..Default::default() })
            .await
            .unwrap()
            .is_none());
        assert!(!service.delete("99").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let (_, service) = service();
        let saved = service.create(test_beer()).await.unwrap();
        let id = saved.id.unwrap();

        assert!(service.delete(&id).await.unwrap());
        assert!(service.get_by_id(&id).await.unwrap().is_none());
        assert!(!service.delete(&id).await.unwrap());
    }
}
