//! Persistence boundary for todo lists.
//!
//! `TodoListStore` is the only thing the service knows about storage. Two
//! implementations ship with the crate: an in-memory map and a redb file.
//! Both assign ids from a single sequence shared by lists and items.

pub mod db;
pub mod memory;

pub use db::RedbStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::TodoList;

pub trait TodoListStore: Send + Sync {
    /// Look up a list by id.
    fn find(&self, id: u64) -> Result<Option<TodoList>>;

    /// Persist `list`, assigning an id to it and to each item that lacks
    /// one. Re-saving an identified list overwrites it in place.
    fn save(&self, list: TodoList) -> Result<TodoList>;

    /// Read, mutate, and write back the list `id` as one atomic step.
    ///
    /// Returns `Ok(None)` without calling `apply` when the list does not
    /// exist. Items added by `apply` get ids before the write.
    fn update(&self, id: u64, apply: &mut dyn FnMut(&mut TodoList)) -> Result<Option<TodoList>>;
}

/// Fill in missing list and item ids from `next_id`.
pub(crate) fn assign_ids(list: &mut TodoList, mut next_id: impl FnMut() -> u64) {
    if list.id.is_none() {
        list.id = Some(next_id());
    }
    for item in list.items.iter_mut().filter(|i| i.id.is_none()) {
        item.id = Some(next_id());
    }
}

/// Largest list or item id carried by `list`, or 0 when it has none.
pub(crate) fn highest_id(list: &TodoList) -> u64 {
    list.items
        .iter()
        .filter_map(|i| i.id)
        .chain(list.id)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoItem;

    #[test]
    fn highest_id_covers_list_and_items() {
        let mut list = TodoList::new(vec![TodoItem::with_id(9, "a"), TodoItem::new("b")]);
        assert_eq!(highest_id(&list), 9);
        list.id = Some(12);
        assert_eq!(highest_id(&list), 12);
        assert_eq!(highest_id(&TodoList::new(Vec::new())), 0);
    }

    #[test]
    fn assign_ids_fills_only_missing() {
        let mut list = TodoList::new(vec![TodoItem::with_id(3, "kept"), TodoItem::new("new")]);
        let mut seq = 10;
        assign_ids(&mut list, || {
            seq += 1;
            seq
        });
        assert_eq!(list.id, Some(11));
        assert_eq!(list.items[0].id, Some(3));
        assert_eq!(list.items[1].id, Some(12));
    }

    #[test]
    fn assign_ids_keeps_existing_list_id() {
        let mut list = TodoList::with_item(TodoItem::with_id(2, "a"));
        list.id = Some(1);
        assign_ids(&mut list, || panic!("no id should be drawn"));
        assert_eq!(list.id, Some(1));
    }
}
