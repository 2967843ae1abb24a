//! Evman Category Registry
//!
//! Immutable lookup from a category label (e.g. `[Formula1]`) to the
//! posting metadata every event of that category carries:
//! - the channel the event is announced on
//! - the image attached to the announcement
//! - the role mention token, possibly empty
//!
//! The registry is built once through [`RegistryBuilder`] and handed to
//! whoever needs it; [`Registry::builtin`] returns the compiled-in catalog.

mod builder;
mod catalog;
mod registry;
mod types;

pub use builder::{CategoryBuilder, RegistryBuilder, RegistryError};
pub use registry::Registry;
pub use types::CategoryMeta;
