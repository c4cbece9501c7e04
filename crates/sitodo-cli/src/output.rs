use serde::Serialize;
use sitodo_core::TodoListView;
use std::fmt::Write;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn format_id(id: Option<u64>) -> String {
    id.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string())
}

fn status(finished: bool) -> &'static str {
    if finished {
        "Finished"
    } else {
        "Not Finished"
    }
}

/// Plain-text rendering of a list: header, one row per item, then the
/// motivation message.
pub fn render_list(view: &TodoListView) -> String {
    let id_width = view
        .items
        .iter()
        .map(|i| format_id(i.id).len())
        .fold("ID".len(), usize::max);
    let title_width = view
        .items
        .iter()
        .map(|i| i.title.chars().count())
        .fold("TITLE".len(), usize::max);

    let mut out = String::new();
    let _ = writeln!(out, "List [{}]", format_id(view.id));
    let _ = writeln!(out, "{:id_width$}  {:title_width$}  STATUS", "ID", "TITLE");
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(id_width),
        "-".repeat(title_width),
        "-".repeat(status(false).len())
    );
    for item in &view.items {
        let _ = writeln!(
            out,
            "{:id_width$}  {:title_width$}  {}",
            format_id(item.id),
            item.title,
            status(item.finished)
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", view.motivation);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitodo_core::TodoItem;

    fn view(items: Vec<TodoItem>) -> TodoListView {
        TodoListView {
            id: Some(1),
            total: items.len(),
            finished: items.iter().filter(|i| i.finished).count(),
            items,
            motivation: "keep going".to_string(),
        }
    }

    #[test]
    fn columns_align_to_longest_title() {
        let mut done = TodoItem::with_id(3, "Cut grass");
        done.set_finished(true);
        let out = render_list(&view(vec![TodoItem::with_id(2, "Milk"), done]));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "List [1]");
        assert_eq!(lines[1], "ID  TITLE      STATUS");
        assert_eq!(lines[3], "2   Milk       Not Finished");
        assert_eq!(lines[4], "3   Cut grass  Finished");
        assert_eq!(lines[6], "keep going");
    }

    #[test]
    fn missing_ids_render_as_dash() {
        assert_eq!(format_id(None), "-");
        assert_eq!(format_id(Some(42)), "42");
    }
}
