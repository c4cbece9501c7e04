pub mod config;
pub mod init;
pub mod item;
pub mod list;
pub mod message;
pub mod serve;

use anyhow::Context;
use sitodo_core::config::{open_store, Config};
use sitodo_core::{MotivationMessage, TodoListService};
use std::path::Path;

/// Build the service from the project's config, falling back to defaults
/// when `sitodo init` has not been run.
pub(crate) fn open_service(root: &Path) -> anyhow::Result<(Config, TodoListService)> {
    let config = Config::load_or_default(root).context("failed to load config")?;
    let store = open_store(root, &config.storage).context("failed to open todo list store")?;
    let service = TodoListService::new(store, MotivationMessage::new(config.motivation.clone()));
    Ok((config, service))
}
