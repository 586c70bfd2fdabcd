use std::sync::Arc;

use vicki_core::roster::Roster;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone, Default)]
pub struct AppState {
    pub roster: Arc<Roster>,
}

impl AppState {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }
}
