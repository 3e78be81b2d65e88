//! Entity services
//!
//! One generic service drives every record kind. The kind supplies its
//! resource path through [`Entity`]; date fields are converted by the serde
//! adapters on the model, so bodies are already date-processed in both
//! directions by the time they cross this layer.

use std::marker::PhantomData;

use shared::{
    Employee, Employer, Entity, EntityId, HttpResponse, Quote, RequestOptions,
    create_request_option, merge_missing,
};

use crate::client::HttpClient;
use crate::{ClientConfig, ClientResult};

/// Response carrying at most one record
pub type EntityResponse<E> = HttpResponse<E>;

/// Response carrying an ordered collection of records
pub type EntityArrayResponse<E> = HttpResponse<Vec<E>>;

pub type EmployerService<C> = EntityService<Employer, C>;
pub type EmployeeService<C> = EntityService<Employee, C>;
pub type QuoteService<C> = EntityService<Quote, C>;

/// REST access object for one record kind
///
/// Stateless apart from its resource URL; every operation issues exactly
/// one call and never retries.
pub struct EntityService<E, C> {
    client: C,
    resource_url: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E, C: Clone> Clone for EntityService<E, C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource_url: self.resource_url.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, C: HttpClient> EntityService<E, C> {
    pub fn new(client: C, config: &ClientConfig) -> Self {
        Self {
            client,
            resource_url: config.endpoint_for(E::RESOURCE),
            _entity: PhantomData,
        }
    }

    /// Resource URL relative to the transport's base address
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn item_url(&self, id: EntityId) -> String {
        format!("{}/{}", self.resource_url, id)
    }

    /// Identifier of a record that must already be persisted.
    ///
    /// # Panics
    ///
    /// Panics if the record has no identifier. Callers decide between
    /// create and update before calling in.
    fn persisted_id(entity: &E, operation: &str) -> EntityId {
        match entity.identifier() {
            Some(id) => id,
            None => panic!("{} called on an unsaved {}", operation, E::NAME),
        }
    }

    /// `POST {base}`
    pub async fn create(&self, entity: &E) -> ClientResult<EntityResponse<E>> {
        tracing::debug!(entity = E::NAME, url = %self.resource_url, "create");
        let response: EntityResponse<E> = self.client.post(&self.resource_url, entity).await?;
        tracing::info!(
            entity = E::NAME,
            id = ?response.body.as_ref().and_then(|e| e.identifier()),
            "{} created",
            E::NAME
        );
        Ok(response)
    }

    /// `PUT {base}/{id}`
    ///
    /// # Panics
    ///
    /// Panics if `entity` has no identifier.
    pub async fn update(&self, entity: &E) -> ClientResult<EntityResponse<E>> {
        let id = Self::persisted_id(entity, "update");
        tracing::debug!(entity = E::NAME, id, "update");
        let response = self.client.put(&self.item_url(id), entity).await?;
        tracing::info!(entity = E::NAME, id, "{} updated", E::NAME);
        Ok(response)
    }

    /// `PATCH {base}/{id}` with only the fields set on `entity`
    ///
    /// # Panics
    ///
    /// Panics if `entity` has no identifier.
    pub async fn partial_update(&self, entity: &E) -> ClientResult<EntityResponse<E>> {
        let id = Self::persisted_id(entity, "partial_update");
        tracing::debug!(entity = E::NAME, id, "partial update");
        let response = self.client.patch(&self.item_url(id), entity).await?;
        tracing::info!(entity = E::NAME, id, "{} patched", E::NAME);
        Ok(response)
    }

    /// `GET {base}/{id}`; an absent body means the record does not exist
    pub async fn find(&self, id: EntityId) -> ClientResult<EntityResponse<E>> {
        tracing::debug!(entity = E::NAME, id, "find");
        self.client.get(&self.item_url(id), &[]).await
    }

    /// `GET {base}?params`
    pub async fn query(&self, req: Option<&RequestOptions>) -> ClientResult<EntityArrayResponse<E>> {
        let params = create_request_option(req);
        tracing::debug!(entity = E::NAME, params = ?params, "query");
        self.client.get(&self.resource_url, &params).await
    }

    /// `DELETE {base}/{id}`; only the status matters
    pub async fn delete(&self, id: EntityId) -> ClientResult<HttpResponse<()>> {
        tracing::debug!(entity = E::NAME, id, "delete");
        let response = self.client.delete(&self.item_url(id)).await?;
        tracing::info!(entity = E::NAME, id, "{} deleted", E::NAME);
        Ok(response)
    }

    /// Prepend the candidates not already in `collection` (by identifier)
    pub fn add_to_collection_if_missing<'a, I>(&self, collection: &[E], candidates: I) -> Vec<E>
    where
        I: IntoIterator<Item = Option<&'a E>>,
    {
        merge_missing(collection, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NetworkHttpClient;

    fn quote_service(config: &ClientConfig) -> QuoteService<NetworkHttpClient> {
        EntityService::new(NetworkHttpClient::new(config).unwrap(), config)
    }

    #[test]
    fn test_resource_urls() {
        let config = ClientConfig::default();
        let quotes = quote_service(&config);
        assert_eq!(quotes.resource_url(), "api/quotes");
        assert_eq!(quotes.item_url(12), "api/quotes/12");

        let prefixed = config.with_endpoint_prefix("services/boost/");
        let employers: EmployerService<_> =
            EntityService::new(NetworkHttpClient::new(&prefixed).unwrap(), &prefixed);
        assert_eq!(employers.resource_url(), "services/boost/api/employers");
    }

    #[test]
    fn test_add_to_collection_if_missing() {
        let service = quote_service(&ClientConfig::default());
        let existing = vec![Quote {
            id: Some(456),
            ..Default::default()
        }];
        let candidate = Quote {
            id: Some(123),
            ..Default::default()
        };

        let merged = service.add_to_collection_if_missing(&existing, [None, Some(&candidate)]);
        let ids: Vec<_> = merged.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![Some(123), Some(456)]);
    }

    #[tokio::test]
    #[should_panic(expected = "update called on an unsaved Quote")]
    async fn test_update_requires_identifier() {
        let service = quote_service(&ClientConfig::default());
        let _ = service.update(&Quote::default()).await;
    }
}
