//! Persistent todo list storage using redb.
//!
//! # Table design
//!
//! ```text
//! LISTS: u64 list id  -> JSON-encoded TodoList
//! META:  "last_id"    -> u64, last id handed out to a list or item
//! ```
//!
//! Every `save` and `update` runs inside a single write transaction, and redb
//! allows one writer at a time, so read-modify-write cycles never interleave.

use std::path::Path;

use redb::{Database, ReadableTable, Table, TableDefinition};

use crate::error::{Result, SitodoError};
use crate::model::TodoList;

use super::{assign_ids, highest_id, TodoListStore};

// ---------------------------------------------------------------------------
// Table definitions
// ---------------------------------------------------------------------------

const LISTS: TableDefinition<u64, &[u8]> = TableDefinition::new("todo_lists");
const META: TableDefinition<&str, u64> = TableDefinition::new("meta");

const LAST_ID_KEY: &str = "last_id";

fn store_err(e: impl std::fmt::Display) -> SitodoError {
    SitodoError::Store(e.to_string())
}

// ---------------------------------------------------------------------------
// RedbStore
// ---------------------------------------------------------------------------

pub struct RedbStore {
    db: Database,
}

impl RedbStore {
    /// Open or create the database at `path`, creating both tables if
    /// they don't exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        let db = Database::create(path).map_err(store_err)?;
        let wt = db.begin_write().map_err(store_err)?;
        wt.open_table(LISTS).map_err(store_err)?;
        wt.open_table(META).map_err(store_err)?;
        wt.commit().map_err(store_err)?;
        tracing::debug!(path = %path.display(), "opened todo list database");
        Ok(Self { db })
    }
}

/// Assign missing ids from the META sequence and write `list` into LISTS.
fn persist(
    lists: &mut Table<'_, u64, &'static [u8]>,
    meta: &mut Table<'_, &'static str, u64>,
    mut list: TodoList,
) -> Result<TodoList> {
    let mut last_id = meta
        .get(LAST_ID_KEY)
        .map_err(store_err)?
        .map(|v| v.value())
        .unwrap_or(0);
    assign_ids(&mut list, || {
        last_id += 1;
        last_id
    });
    last_id = last_id.max(highest_id(&list));
    meta.insert(LAST_ID_KEY, last_id).map_err(store_err)?;

    let id = list.id.unwrap_or_default();
    let value = serde_json::to_vec(&list)?;
    lists.insert(id, value.as_slice()).map_err(store_err)?;
    Ok(list)
}

impl TodoListStore for RedbStore {
    fn find(&self, id: u64) -> Result<Option<TodoList>> {
        let rt = self.db.begin_read().map_err(store_err)?;
        let table = rt.open_table(LISTS).map_err(store_err)?;
        let found: Option<TodoList> = match table.get(id).map_err(store_err)? {
            Some(v) => Some(serde_json::from_slice(v.value())?),
            None => None,
        };
        Ok(found)
    }

    fn save(&self, list: TodoList) -> Result<TodoList> {
        let wt = self.db.begin_write().map_err(store_err)?;
        let saved = {
            let mut lists = wt.open_table(LISTS).map_err(store_err)?;
            let mut meta = wt.open_table(META).map_err(store_err)?;
            persist(&mut lists, &mut meta, list)?
        };
        wt.commit().map_err(store_err)?;
        Ok(saved)
    }

    fn update(&self, id: u64, apply: &mut dyn FnMut(&mut TodoList)) -> Result<Option<TodoList>> {
        let wt = self.db.begin_write().map_err(store_err)?;
        let updated = {
            let mut lists = wt.open_table(LISTS).map_err(store_err)?;
            let current: Option<TodoList> = match lists.get(id).map_err(store_err)? {
                Some(v) => Some(serde_json::from_slice(v.value())?),
                None => None,
            };
            let Some(mut list) = current else {
                return Ok(None);
            };
            apply(&mut list);
            let mut meta = wt.open_table(META).map_err(store_err)?;
            persist(&mut lists, &mut meta, list)?
        };
        wt.commit().map_err(store_err)?;
        Ok(Some(updated))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
