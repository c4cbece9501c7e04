pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod motivation;
pub mod paths;
pub mod service;
pub mod store;

pub use error::{Result, SitodoError};
pub use model::{TodoItem, TodoList};
pub use motivation::{MotivationConfig, MotivationMessage};
pub use service::{TodoListService, TodoListView};
pub use store::TodoListStore;
