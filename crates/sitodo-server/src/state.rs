use sitodo_core::TodoListService;
use std::sync::Arc;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TodoListService>,
}

impl AppState {
    pub fn new(service: Arc<TodoListService>) -> Self {
        Self { service }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitodo_core::store::MemoryStore;
    use sitodo_core::MotivationMessage;

    #[test]
    fn cloned_state_shares_service() {
        let service = Arc::new(TodoListService::new(
            Arc::new(MemoryStore::new()),
            MotivationMessage::default(),
        ));
        let state = AppState::new(Arc::clone(&service));
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.service, &cloned.service));
    }
}
