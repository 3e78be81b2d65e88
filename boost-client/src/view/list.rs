use shared::{Entity, EntityId};

use crate::ClientResult;
use crate::client::HttpClient;
use crate::service::EntityService;

/// How a delete confirmation dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Dismissed,
}

/// Delete confirmation for a single record
pub struct DeleteDialog<E, C> {
    service: EntityService<E, C>,
}

impl<E: Entity, C: HttpClient> DeleteDialog<E, C> {
    pub fn new(service: EntityService<E, C>) -> Self {
        Self { service }
    }

    pub fn cancel(&self) -> DeleteOutcome {
        DeleteOutcome::Dismissed
    }

    /// Delete the record; the dialog stays open (error returned) on failure
    pub async fn confirm_delete(&self, id: EntityId) -> ClientResult<DeleteOutcome> {
        self.service.delete(id).await?;
        Ok(DeleteOutcome::Deleted)
    }
}

/// Collection view of one record kind
pub struct EntityList<E, C> {
    service: EntityService<E, C>,
    entities: Option<Vec<E>>,
    is_loading: bool,
}

impl<E: Entity, C: HttpClient> EntityList<E, C> {
    pub fn new(service: EntityService<E, C>) -> Self {
        Self {
            service,
            entities: None,
            is_loading: false,
        }
    }

    /// Records loaded so far; `None` before the first successful load
    pub fn entities(&self) -> Option<&[E]> {
        self.entities.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Fetch the whole collection; an absent body is an empty collection
    pub async fn load_all(&mut self) -> ClientResult<()> {
        self.is_loading = true;
        let result = self.service.query(None).await;
        self.is_loading = false;

        let response = result?;
        self.entities = Some(response.body.unwrap_or_default());
        Ok(())
    }

    /// React to a closed delete dialog: reload only after a deletion
    pub async fn on_delete_closed(&mut self, outcome: DeleteOutcome) -> ClientResult<()> {
        match outcome {
            DeleteOutcome::Deleted => self.load_all().await,
            DeleteOutcome::Dismissed => Ok(()),
        }
    }
}
