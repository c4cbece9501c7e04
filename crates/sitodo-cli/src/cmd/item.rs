use crate::cmd::list::print_list;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ItemSubcommand {
    /// Mark an item as finished (or unfinished with --undo)
    Finish {
        list_id: u64,
        item_id: u64,
        /// Mark the item as not finished instead
        #[arg(long)]
        undo: bool,
    },
}

pub fn run(root: &Path, subcmd: ItemSubcommand, json: bool) -> anyhow::Result<()> {
    let (_, service) = super::open_service(root)?;
    match subcmd {
        ItemSubcommand::Finish {
            list_id,
            item_id,
            undo,
        } => {
            let list = service.set_item_finished(list_id, item_id, !undo)?;
            if !json {
                let matched = list.items.iter().any(|i| i.id == Some(item_id));
                if matched {
                    let state = if undo { "not finished" } else { "finished" };
                    println!("Marked item [{item_id}] as {state}");
                } else {
                    println!("No item [{item_id}] in list [{list_id}]; nothing changed");
                }
            }
            print_list(&service, &list, json)
        }
    }
}
