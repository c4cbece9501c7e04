use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TodoItem
// ---------------------------------------------------------------------------

/// A titled task with a finished flag.
///
/// `id` stays `None` until the item is first saved; the store assigns it and
/// never reassigns it. Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub finished: bool,
}

impl TodoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            finished: false,
        }
    }

    pub fn with_id(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            ..Self::new(title)
        }
    }

    pub fn set_finished(&mut self, finished: bool) {
        self.finished = finished;
    }
}

// ---------------------------------------------------------------------------
// TodoList
// ---------------------------------------------------------------------------

/// An ordered collection of todo items sharing one generated id.
///
/// Insertion order is display order. Lists are only ever created together
/// with their first item, so a stored list is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoList {
    pub id: Option<u64>,
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { id: None, items }
    }

    pub fn with_item(item: TodoItem) -> Self {
        Self::new(vec![item])
    }

    pub fn add_item(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    pub fn count_total(&self) -> usize {
        self.items.len()
    }

    pub fn count_finished(&self) -> usize {
        self.items.iter().filter(|i| i.finished).count()
    }

    /// Set `finished` on every item whose id equals `item_id`.
    ///
    /// Returns how many items matched; zero leaves the list untouched.
    pub fn set_item_finished(&mut self, item_id: u64, finished: bool) -> usize {
        let mut matched = 0;
        for item in self.items.iter_mut().filter(|i| i.id == Some(item_id)) {
            item.set_finished(finished);
            matched += 1;
        }
        matched
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_unfinished_without_id() {
        let item = TodoItem::new("Buy milk");
        assert_eq!(item.id, None);
        assert_eq!(item.title, "Buy milk");
        assert!(!item.finished);
    }

    #[test]
    fn item_equality_covers_finished_flag() {
        let a = TodoItem::with_id(1, "Buy milk");
        let mut b = TodoItem::with_id(1, "Buy milk");
        assert_eq!(a, b);

        b.set_finished(true);
        assert_ne!(a, b);
    }

    #[test]
    fn item_equality_covers_title_and_id() {
        assert_ne!(TodoItem::with_id(1, "Buy milk"), TodoItem::with_id(2, "Buy milk"));
        assert_ne!(TodoItem::with_id(1, "Buy milk"), TodoItem::with_id(1, "Cut grass"));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut list = TodoList::with_item(TodoItem::new("first"));
        list.add_item(TodoItem::new("second"));
        list.add_item(TodoItem::new("third"));

        let titles: Vec<&str> = list.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn list_equality_is_structural() {
        let a = TodoList::new(vec![TodoItem::with_id(1, "a"), TodoItem::with_id(2, "b")]);
        let b = TodoList::new(vec![TodoItem::with_id(1, "a"), TodoItem::with_id(2, "b")]);
        let reordered = TodoList::new(vec![TodoItem::with_id(2, "b"), TodoItem::with_id(1, "a")]);
        assert_eq!(a, b);
        assert_ne!(a, reordered);
    }

    #[test]
    fn counts_finished_items() {
        let mut list = TodoList::new(vec![
            TodoItem::with_id(1, "a"),
            TodoItem::with_id(2, "b"),
            TodoItem::with_id(3, "c"),
        ]);
        assert_eq!(list.count_total(), 3);
        assert_eq!(list.count_finished(), 0);

        list.set_item_finished(2, true);
        assert_eq!(list.count_finished(), 1);
    }

    #[test]
    fn set_item_finished_updates_every_match() {
        let mut list = TodoList::new(vec![
            TodoItem::with_id(7, "dup one"),
            TodoItem::with_id(8, "other"),
            TodoItem::with_id(7, "dup two"),
        ]);
        let matched = list.set_item_finished(7, true);
        assert_eq!(matched, 2);
        assert!(list.items[0].finished);
        assert!(!list.items[1].finished);
        assert!(list.items[2].finished);
    }

    #[test]
    fn set_item_finished_unknown_id_is_noop() {
        let mut list = TodoList::with_item(TodoItem::with_id(1, "a"));
        let before = list.clone();
        assert_eq!(list.set_item_finished(99, true), 0);
        assert_eq!(list, before);
    }

    #[test]
    fn unsaved_ids_serialize_as_null() {
        let list = TodoList::with_item(TodoItem::new("Buy milk"));
        let json = serde_json::to_value(&list).unwrap();
        assert!(json["id"].is_null());
        assert_eq!(json["items"][0]["title"], "Buy milk");
        assert_eq!(json["items"][0]["finished"], false);
    }
}
