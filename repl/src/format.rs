//! Output formatting utilities for the REPL.

use evman_ledger::EventRow;
use evman_registry::Registry;

/// Usage reminder printed for unrecognised input.
pub fn usage_text() -> &'static str {
    "Available commands:\n\
     head <lines>\n\
     tail <lines>\n\
     insert/new\n\
     next <date> [category]\n\
     categories\n\
     exit/quit"
}

/// Format a single event with every field labelled.
pub fn format_event(row: &EventRow) -> String {
    let mut out = format!(
        "Category: {}\nTitle: {}\nDescription: {}\nDate: {}\nChannel: {}",
        row.category, row.title, row.description, row.date, row.channel
    );
    if !row.image.is_empty() {
        out.push_str(&format!("\nImage: {}", row.image));
    }
    if !row.mention.is_empty() {
        out.push_str(&format!("\nMention: {}", row.mention));
    }
    out
}

/// Format the registry as one `label  channel  mention` line per category.
pub fn format_categories(registry: &Registry) -> String {
    let categories = registry.sorted_categories();
    if categories.is_empty() {
        return "(no categories)".to_string();
    }

    let label_width = categories
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);

    categories
        .iter()
        .map(|c| {
            let line = format!("{:<width$}  {}", c.label, c.channel_id, width = label_width);
            if c.has_mention() {
                format!("{}  {}", line, c.mention_token)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_core_commands() {
        let usage = usage_text();
        assert!(usage.starts_with("Available commands:"));
        assert!(usage.contains("\nhead <lines>\n"));
        assert!(usage.contains("\ntail <lines>\n"));
        assert!(usage.contains("\ninsert/new\n"));
    }

    #[test]
    fn categories_are_sorted_and_aligned() {
        let registry = Registry::builtin().unwrap();
        let text = format_categories(&registry);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), registry.category_count());
        assert_eq!(lines[0], "[Formula1]  665554362570899476  <@&1005570005682901133>");
        assert_eq!(lines[1], "[Formula2]  665554362570899476");
        assert_eq!(lines[5], "[MotoGP]    665554362570899476  <@&1005573264619356290>");
    }

    #[test]
    fn event_omits_empty_optional_fields() {
        let registry = Registry::builtin().unwrap();
        let meta = registry.resolve("[Formula2]").unwrap();
        let mut row = EventRow::new(meta, "Monza", "Feature race", "2024-09-01");
        row.image.clear();

        let text = format_event(&row);

        assert!(text.contains("Title: Monza\n"));
        assert!(!text.contains("Image:"));
        assert!(!text.contains("Mention:"));
    }
}
