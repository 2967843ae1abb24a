//! Event row type and its on-disk field layout.

use csv::StringRecord;
use evman_registry::CategoryMeta;

/// Number of fields in every row of the events file.
pub const FIELD_COUNT: usize = 7;

/// Column names, in file order.
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "Category",
    "Title",
    "Description",
    "Date",
    "Channel",
    "Image",
    "Mention",
];

/// One scheduled event.
///
/// `channel`, `image` and `mention` are copied from the category's registry
/// entry when the row is created and are never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub category: String,
    pub title: String,
    pub description: String,
    /// Free-form date text. Compared as a plain string.
    pub date: String,
    pub channel: String,
    pub image: String,
    pub mention: String,
}

impl EventRow {
    /// Build a row for a resolved category.
    pub fn new(
        meta: &CategoryMeta,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            category: meta.label.clone(),
            title: title.into(),
            description: description.into(),
            date: date.into(),
            channel: meta.channel_id.clone(),
            image: meta.image_url.clone(),
            mention: meta.mention_token.clone(),
        }
    }

    /// Build a row from a file record. Returns `None` unless the record has
    /// exactly [`FIELD_COUNT`] fields.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        if record.len() != FIELD_COUNT {
            return None;
        }
        Some(Self {
            category: record[0].to_string(),
            title: record[1].to_string(),
            description: record[2].to_string(),
            date: record[3].to_string(),
            channel: record[4].to_string(),
            image: record[5].to_string(),
            mention: record[6].to_string(),
        })
    }

    /// Fields in file order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.category.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            self.date.as_str(),
            self.channel.as_str(),
            self.image.as_str(),
            self.mention.as_str(),
        ]
    }
}
