use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, SitodoError};
use crate::model::TodoList;

use super::{assign_ids, highest_id, TodoListStore};

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    lists: BTreeMap<u64, TodoList>,
}

impl Inner {
    fn persist(&mut self, mut list: TodoList) -> TodoList {
        let last_id = &mut self.last_id;
        assign_ids(&mut list, || {
            *last_id += 1;
            *last_id
        });
        self.last_id = self.last_id.max(highest_id(&list));
        let id = list.id.unwrap_or_default();
        self.lists.insert(id, list.clone());
        list
    }
}

/// Process-local store. Contents are lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| SitodoError::Store(format!("memory store poisoned: {e}")))
    }
}

impl TodoListStore for MemoryStore {
    fn find(&self, id: u64) -> Result<Option<TodoList>> {
        Ok(self.lock()?.lists.get(&id).cloned())
    }

    fn save(&self, list: TodoList) -> Result<TodoList> {
        Ok(self.lock()?.persist(list))
    }

    fn update(&self, id: u64, apply: &mut dyn FnMut(&mut TodoList)) -> Result<Option<TodoList>> {
        let mut guard = self.lock()?;
        let Some(mut list) = guard.lists.get(&id).cloned() else {
            return Ok(None);
        };
        apply(&mut list);
        Ok(Some(guard.persist(list)))
    }
}
