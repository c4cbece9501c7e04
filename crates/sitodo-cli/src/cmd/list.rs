use crate::output::{format_id, print_json, render_list};
use anyhow::Context;
use clap::Subcommand;
use sitodo_core::{TodoList, TodoListService};
use std::path::Path;

#[derive(Subcommand)]
pub enum ListSubcommand {
    /// Show a list's items and its motivation message
    Show { id: u64 },
    /// Start a new list with its first item
    Create {
        #[arg(required = true)]
        title: Vec<String>,
    },
    /// Append an item to an existing list
    Add {
        id: u64,
        #[arg(required = true)]
        title: Vec<String>,
    },
}

pub fn run(root: &Path, subcmd: ListSubcommand, json: bool) -> anyhow::Result<()> {
    let (_, service) = super::open_service(root)?;
    match subcmd {
        ListSubcommand::Show { id } => show(&service, id, json),
        ListSubcommand::Create { title } => create(&service, &title.join(" "), json),
        ListSubcommand::Add { id, title } => add(&service, id, &title.join(" "), json),
    }
}

fn show(service: &TodoListService, id: u64, json: bool) -> anyhow::Result<()> {
    let list = service.get_by_id(id)?;
    print_list(service, &list, json)
}

fn create(service: &TodoListService, title: &str, json: bool) -> anyhow::Result<()> {
    let list = service
        .create_with_item(title)
        .context("failed to create list")?;

    if json {
        print_list(service, &list, true)
    } else {
        println!("Created list [{}]: {title}", format_id(list.id));
        Ok(())
    }
}

fn add(service: &TodoListService, id: u64, title: &str, json: bool) -> anyhow::Result<()> {
    let list = service.append_item(id, title)?;

    if json {
        print_list(service, &list, true)
    } else {
        let item_id = list.items.last().and_then(|i| i.id);
        println!("Added item [{}] to list [{id}]: {title}", format_id(item_id));
        Ok(())
    }
}

pub(crate) fn print_list(service: &TodoListService, list: &TodoList, json: bool) -> anyhow::Result<()> {
    let view = service.view(list);
    if json {
        return print_json(&view);
    }
    print!("{}", render_list(&view));
    Ok(())
}
