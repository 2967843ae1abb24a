//! Evman Ledger
//!
//! The on-disk table of scheduled events.
//!
//! Responsibilities:
//! - Load the seven-column, header-less events file
//! - Append rows whose category resolves in the registry
//! - Keep rows ordered by date (plain text comparison) and rewrite the whole file on every insert
//! - Serve head/tail previews over the four-column compact view
//!
//! Rewriting the full file on every insert is fine for the small ledgers this
//! tool manages; an interrupted rewrite can leave the file truncated.

mod error;
mod ledger;
mod row;
mod view;

pub use error::{LedgerError, LedgerResult};
pub use ledger::EventLedger;
pub use row::{EventRow, COLUMNS, FIELD_COUNT};
pub use view::{CompactRow, CompactView, Preview, COMPACT_COLUMNS};
