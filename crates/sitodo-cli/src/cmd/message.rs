use crate::output::print_json;
use sitodo_core::{config::Config, MotivationMessage};
use std::path::Path;

pub fn run(root: &Path, total: usize, finished: usize, json: bool) -> anyhow::Result<()> {
    if finished > total {
        anyhow::bail!("finished ({finished}) cannot exceed total ({total})");
    }
    let config = Config::load_or_default(root)?;
    let message = MotivationMessage::new(config.motivation).compute(total, finished);

    if json {
        print_json(&serde_json::json!({
            "total": total,
            "finished": finished,
            "message": message,
        }))?;
    } else {
        println!("{message}");
    }
    Ok(())
}
