//! Route resolution
//!
//! Before a detail or edit view is built, the resolver turns the route's
//! `id` parameter into a record: fetched for an existing id, empty for
//! "new", or a redirect to the not-found page when the backend has nothing.

use std::collections::HashMap;

use shared::{Entity, EntityId};

use crate::ClientResult;
use crate::client::HttpClient;
use crate::navigation::{NOT_FOUND_ROUTE, Navigator};
use crate::service::EntityService;

/// Route parameters of the view being entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters of an `:id/view` or `:id/edit` route
    pub fn with_id(id: impl ToString) -> Self {
        Self::new().with("id", id.to_string())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The `id` parameter; an empty value counts as absent
    pub fn id(&self) -> Option<&str> {
        self.get("id").filter(|id| !id.is_empty())
    }
}

/// Outcome of a resolution
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<E> {
    /// The view gets this record (fetched, or empty for "new")
    Resolved(E),
    /// Navigation went to the not-found page; the view is never built
    Redirected,
}

impl<E> Resolution<E> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn into_entity(self) -> Option<E> {
        match self {
            Self::Resolved(entity) => Some(entity),
            Self::Redirected => None,
        }
    }
}

/// Resolves the record for one kind's detail and edit routes
pub struct RouteResolver<E, C, N> {
    service: EntityService<E, C>,
    navigator: N,
}

impl<E: Entity, C: HttpClient, N: Navigator> RouteResolver<E, C, N> {
    pub fn new(service: EntityService<E, C>, navigator: N) -> Self {
        Self { service, navigator }
    }

    /// Resolve the record for `params`.
    ///
    /// Transport and server errors are returned as-is; only an absent body
    /// (or an id that cannot name a record) leads to the not-found page.
    pub async fn resolve(&self, params: &RouteParams) -> ClientResult<Resolution<E>> {
        let Some(raw_id) = params.id() else {
            return Ok(Resolution::Resolved(E::default()));
        };

        // a non-numeric id cannot name a record: not-found, without asking the backend
        let Ok(id) = raw_id.parse::<EntityId>() else {
            tracing::warn!(entity = E::NAME, id = raw_id, "Malformed id in route");
            return Ok(self.redirect());
        };

        let response = self.service.find(id).await?;
        match response.body {
            Some(entity) => Ok(Resolution::Resolved(entity)),
            None => {
                tracing::warn!(entity = E::NAME, id, "{} not found", E::NAME);
                Ok(self.redirect())
            }
        }
    }

    fn redirect(&self) -> Resolution<E> {
        self.navigator.navigate(NOT_FOUND_ROUTE);
        Resolution::Redirected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_params_id() {
        assert_eq!(RouteParams::new().id(), None);
        assert_eq!(RouteParams::new().with("id", "").id(), None);
        assert_eq!(RouteParams::with_id(123).id(), Some("123"));
        assert_eq!(RouteParams::with_id(1).get("other"), None);
    }

    #[test]
    fn test_resolution_accessors() {
        assert_eq!(Resolution::Resolved(5).into_entity(), Some(5));
        assert!(!Resolution::<i32>::Redirected.is_resolved());
        assert_eq!(Resolution::<i32>::Redirected.into_entity(), None);
    }
}
