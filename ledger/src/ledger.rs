//! The file-backed event ledger.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use evman_registry::Registry;
use tracing::{debug, info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::row::EventRow;
use crate::view::{CompactView, Preview};

/// Ordered table of events mirrored to a comma-separated file.
///
/// The file is read once by [`EventLedger::load`] and rewritten in full after
/// every successful [`EventLedger::insert`].
#[derive(Debug)]
pub struct EventLedger {
    /// Path to the events file.
    path: PathBuf,
    /// Category lookup used to fill in posting metadata.
    registry: Registry,
    /// Rows in date order (after the first insert).
    rows: Vec<EventRow>,
    /// Compact projection of `rows`, rebuilt after every mutation.
    compact: CompactView,
}

impl EventLedger {
    /// Load the ledger from an existing events file.
    pub fn load(path: impl AsRef<Path>, registry: Registry) -> LedgerResult<Self> {
        let path = path.as_ref().to_path_buf();
        let rows = Self::read_rows(&path)?;

        debug!(path = %path.display(), rows = rows.len(), "loaded events file");

        let compact = CompactView::from_rows(&rows);
        Ok(Self {
            path,
            registry,
            rows,
            compact,
        })
    }

    /// Read every row of the events file.
    fn read_rows(path: &Path) -> LedgerResult<Vec<EventRow>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LedgerError::file_not_found(path),
            _ => LedgerError::io(path, e),
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| LedgerError::csv(path, e))?;
            let row = EventRow::from_record(&record).ok_or_else(|| {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                LedgerError::malformed_row(path, line, record.len())
            })?;
            rows.push(row);
        }

        Ok(rows)
    }

    /// Replace the events file with `rows`.
    fn write_rows(path: &Path, rows: &[EventRow]) -> LedgerResult<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| LedgerError::csv(path, e))?;

        for row in rows {
            writer
                .write_record(row.fields())
                .map_err(|e| LedgerError::csv(path, e))?;
        }

        writer.flush().map_err(|e| LedgerError::io(path, e))?;

        debug!(path = %path.display(), rows = rows.len(), "rewrote events file");
        Ok(())
    }

    /// Insert a new event.
    ///
    /// The category must resolve in the registry; its channel, image and
    /// mention are copied into the row. The table is then stably sorted by
    /// date and the whole file rewritten. On any error neither the table nor
    /// the file is changed by this call, except that a failed rewrite may
    /// leave the file partially written.
    pub fn insert(
        &mut self,
        category: &str,
        title: &str,
        description: &str,
        date: &str,
    ) -> LedgerResult<()> {
        let meta = match self.registry.resolve(category) {
            Some(meta) => meta,
            None => {
                warn!(category, "rejected insert with unknown category");
                return Err(LedgerError::unknown_category(category));
            }
        };

        let row = EventRow::new(meta, title, description, date);

        let mut rows = self.rows.clone();
        rows.push(row);
        rows.sort_by(|a, b| a.date.cmp(&b.date));

        Self::write_rows(&self.path, &rows)?;

        self.rows = rows;
        self.compact = CompactView::from_rows(&self.rows);

        info!(category, title, date, rows = self.rows.len(), "inserted event");
        Ok(())
    }

    /// The first `n` rows of the compact view.
    pub fn head(&self, n: i64) -> Preview<'_> {
        self.compact.head(n)
    }

    /// The last `n` rows of the compact view.
    pub fn tail(&self, n: i64) -> Preview<'_> {
        self.compact.tail(n)
    }

    /// The first event, in ledger order, dated at or after `from`.
    ///
    /// `category` narrows the search to rows whose category contains the
    /// given text, ignoring case. Dates compare as plain text.
    pub fn next(&self, from: &str, category: Option<&str>) -> Option<&EventRow> {
        let needle = category.map(str::to_lowercase);
        self.rows.iter().find(|row| {
            row.date.as_str() >= from
                && needle
                    .as_deref()
                    .map_or(true, |n| row.category.to_lowercase().contains(n))
        })
    }

    /// All rows in ledger order.
    pub fn rows(&self) -> &[EventRow] {
        &self.rows
    }

    /// The compact projection of the current rows.
    pub fn compact_view(&self) -> &CompactView {
        &self.compact
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the events file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the category registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
