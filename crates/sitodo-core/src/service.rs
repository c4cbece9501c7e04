//! Todo list operations over an injected [`TodoListStore`].

use std::sync::Arc;

use serde::Serialize;

use crate::error::{Result, SitodoError};
use crate::model::{TodoItem, TodoList};
use crate::motivation::MotivationMessage;
use crate::store::TodoListStore;

/// Serializable summary of a list handed to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoListView {
    pub id: Option<u64>,
    pub items: Vec<TodoItem>,
    pub total: usize,
    pub finished: usize,
    pub motivation: String,
}

pub struct TodoListService {
    store: Arc<dyn TodoListStore>,
    message: MotivationMessage,
}

impl TodoListService {
    pub fn new(store: Arc<dyn TodoListStore>, message: MotivationMessage) -> Self {
        Self { store, message }
    }

    pub fn motivation(&self) -> &MotivationMessage {
        &self.message
    }

    pub fn get_by_id(&self, id: u64) -> Result<TodoList> {
        let list = self
            .store
            .find(id)?
            .ok_or(SitodoError::TodoListNotFound(id))?;
        tracing::debug!(id, "todo list exists");
        Ok(list)
    }

    /// Start a new list whose only item is `title`. This is the only way a
    /// list comes into existence.
    pub fn create_with_item(&self, title: impl Into<String>) -> Result<TodoList> {
        let list = TodoList::with_item(TodoItem::new(title));
        let saved = self.store.save(list)?;
        tracing::debug!(id = ?saved.id, "created todo list");
        Ok(saved)
    }

    pub fn append_item(&self, list_id: u64, title: impl Into<String>) -> Result<TodoList> {
        let mut item = Some(TodoItem::new(title));
        let updated = self
            .store
            .update(list_id, &mut |list: &mut TodoList| {
                if let Some(item) = item.take() {
                    list.add_item(item);
                }
            })?
            .ok_or(SitodoError::TodoListNotFound(list_id))?;
        tracing::debug!(id = list_id, items = updated.items.len(), "appended todo item");
        Ok(updated)
    }

    /// Set `finished` on every item in the list whose id is `item_id`. An
    /// unknown item id leaves the list unchanged and is not an error.
    pub fn set_item_finished(&self, list_id: u64, item_id: u64, finished: bool) -> Result<TodoList> {
        let mut matched = 0;
        let updated = self
            .store
            .update(list_id, &mut |list: &mut TodoList| {
                matched = list.set_item_finished(item_id, finished);
            })?
            .ok_or(SitodoError::TodoListNotFound(list_id))?;
        if matched == 0 {
            tracing::debug!(id = list_id, item_id, "no todo item matched");
        } else {
            tracing::debug!(id = list_id, item_id, finished, "updated todo item");
        }
        Ok(updated)
    }

    /// Motivation message for `list`; an absent list counts as empty.
    pub fn compute_display_message(&self, list: Option<&TodoList>) -> String {
        let (total, finished) = list
            .map(|l| (l.count_total(), l.count_finished()))
            .unwrap_or((0, 0));
        self.message.compute(total, finished)
    }

    pub fn view(&self, list: &TodoList) -> TodoListView {
        TodoListView {
            id: list.id,
            items: list.items.clone(),
            total: list.count_total(),
            finished: list.count_finished(),
            motivation: self.compute_display_message(Some(list)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
