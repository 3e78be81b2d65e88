//! Navigation collaborator
//!
//! Views and resolvers never touch a global history; they receive a
//! [`Navigator`] and call it.

use std::sync::{Arc, Mutex, MutexGuard};

/// Route segments of the not-found page
pub const NOT_FOUND_ROUTE: &[&str] = &["404"];

/// Navigation history as seen by views
pub trait Navigator: Send + Sync {
    /// Navigate to the route made of `commands` (e.g. `["quote", "12", "view"]`)
    fn navigate(&self, commands: &[&str]);

    /// Return to the previous view
    fn back(&self);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, commands: &[&str]) {
        (**self).navigate(commands)
    }

    fn back(&self) {
        (**self).back()
    }
}

/// Something that happened to a [`HistoryNavigator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    Navigate(String),
    Back,
}

#[derive(Debug, Default)]
struct History {
    stack: Vec<String>,
    events: Vec<NavigationEvent>,
}

/// In-memory history stack; clones share the same history
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    inner: Arc<Mutex<History>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `route` as the current entry
    pub fn starting_at(route: impl Into<String>) -> Self {
        let navigator = Self::new();
        navigator.lock().stack.push(route.into());
        navigator
    }

    fn lock(&self) -> MutexGuard<'_, History> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current route, if any
    pub fn current(&self) -> Option<String> {
        self.lock().stack.last().cloned()
    }

    /// Every navigation and back call, oldest first
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.lock().events.clone()
    }

    /// Join route segments into a path (`["quote", "1"]` -> `/quote/1`)
    pub fn route_of(commands: &[&str]) -> String {
        format!("/{}", commands.join("/"))
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, commands: &[&str]) {
        let route = Self::route_of(commands);
        tracing::debug!(%route, "navigate");
        let mut history = self.lock();
        history.stack.push(route.clone());
        history.events.push(NavigationEvent::Navigate(route));
    }

    fn back(&self) {
        let mut history = self.lock();
        // the first entry has nowhere to go back to
        if history.stack.len() > 1 {
            history.stack.pop();
        }
        history.events.push(NavigationEvent::Back);
    }
}
