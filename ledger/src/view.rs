//! The four-column compact view and its table rendering.

use std::fmt;

use crate::EventRow;

/// Column names of the compact view.
pub const COMPACT_COLUMNS: [&str; 4] = ["Category", "Title", "Description", "Date"];

/// The leading four columns of an event row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactRow {
    pub category: String,
    pub title: String,
    pub description: String,
    pub date: String,
}

impl CompactRow {
    fn cells(&self) -> [&str; 4] {
        [
            self.category.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            self.date.as_str(),
        ]
    }
}

impl From<&EventRow> for CompactRow {
    fn from(row: &EventRow) -> Self {
        Self {
            category: row.category.clone(),
            title: row.title.clone(),
            description: row.description.clone(),
            date: row.date.clone(),
        }
    }
}

/// Read-only projection of the ledger used for previews. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactView {
    rows: Vec<CompactRow>,
}

impl CompactView {
    /// Project a slice of event rows, keeping their order.
    pub fn from_rows(rows: &[EventRow]) -> Self {
        Self {
            rows: rows.iter().map(CompactRow::from).collect(),
        }
    }

    pub fn rows(&self) -> &[CompactRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows. Larger counts yield every row, non-positive counts none.
    pub fn head(&self, n: i64) -> Preview<'_> {
        let take = usize::try_from(n).unwrap_or(0).min(self.rows.len());
        Preview::new(&self.rows[..take])
    }

    /// The last `n` rows. Negative counts and counts past the end yield every row.
    pub fn tail(&self, n: i64) -> Preview<'_> {
        let len = self.rows.len();
        let take = match usize::try_from(n) {
            Ok(n) if n <= len => n,
            _ => len,
        };
        Preview::new(&self.rows[len - take..])
    }
}

/// A contiguous run of compact rows, rendered as an aligned table.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    rows: &'a [CompactRow],
}

impl<'a> Preview<'a> {
    pub fn new(rows: &'a [CompactRow]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'a [CompactRow] {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = COMPACT_COLUMNS.map(|c| c.chars().count());
        for row in self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: [&str; 4], widths: &[usize; 4]) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    writeln!(f, "{}", line.join(" | ").trim_end())
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return write!(f, "(no events)");
        }

        let widths = self.column_widths();

        // Header
        write_line(f, COMPACT_COLUMNS, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        // Rows
        for row in self.rows {
            write_line(f, row.cells(), &widths)?;
        }

        write!(f, "\n({} rows)", self.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(date: &str) -> CompactRow {
        CompactRow {
            category: "[IMSA]".to_string(),
            title: "Daytona".to_string(),
            description: "Race".to_string(),
            date: date.to_string(),
        }
    }

    fn view(dates: &[&str]) -> CompactView {
        CompactView {
            rows: dates.iter().map(|d| compact(d)).collect(),
        }
    }

    fn dates(preview: Preview<'_>) -> Vec<&str> {
        preview.rows().iter().map(|r| r.date.as_str()).collect()
    }

    #[test]
    fn test_head_takes_leading_rows() {
        let view = view(&["1", "2", "3"]);
        assert_eq!(dates(view.head(2)), vec!["1", "2"]);
    }

    #[test]
    fn test_head_past_end_returns_all() {
        let view = view(&["1", "2"]);
        assert_eq!(dates(view.head(3)), vec!["1", "2"]);
    }

    #[test]
    fn test_head_non_positive_returns_none() {
        let view = view(&["1", "2"]);
        assert!(view.head(0).is_empty());
        assert!(view.head(-4).is_empty());
    }

    #[test]
    fn test_tail_takes_trailing_rows() {
        let view = view(&["1", "2", "3"]);
        assert_eq!(dates(view.tail(2)), vec!["2", "3"]);
        assert!(view.tail(0).is_empty());
    }

    #[test]
    fn test_tail_negative_or_past_end_returns_all() {
        let view = view(&["1", "2", "3", "4", "5"]);
        assert_eq!(view.tail(-1).len(), 5);
        assert_eq!(view.tail(6).len(), 5);
    }

    #[test]
    fn test_preview_renders_aligned_table() {
        let view = view(&["2024-01-01"]);
        let rendered = view.head(1).to_string();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Category | Title   | Description | Date");
        assert_eq!(lines[1], "---------+---------+-------------+-----------");
        assert_eq!(lines[2], "[IMSA]   | Daytona | Race        | 2024-01-01");
        assert_eq!(lines[4], "(1 rows)");
    }

    #[test]
    fn test_preview_empty() {
        let view = CompactView::default();
        assert_eq!(view.tail(3).to_string(), "(no events)");
    }
}
