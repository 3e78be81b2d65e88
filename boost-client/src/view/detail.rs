use shared::Entity;

use crate::navigation::Navigator;

/// Read-only view of a resolved record
pub struct EntityDetail<E, N> {
    entity: E,
    navigator: N,
}

impl<E: Entity, N: Navigator> EntityDetail<E, N> {
    pub fn new(entity: E, navigator: N) -> Self {
        Self { entity, navigator }
    }

    pub fn entity(&self) -> &E {
        &self.entity
    }

    pub fn previous_state(&self) {
        self.navigator.back();
    }
}
