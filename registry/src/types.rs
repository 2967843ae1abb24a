//! Category definition types.

/// Posting metadata attached to a category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMeta {
    /// Category label, bracketed (e.g. `[Formula1]`).
    pub label: String,
    /// Channel the category's events are posted to.
    pub channel_id: String,
    /// Image shown with the announcement. May be empty.
    pub image_url: String,
    /// Role mention token. May be empty.
    pub mention_token: String,
}

impl CategoryMeta {
    pub fn new(label: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            channel_id: channel_id.into(),
            image_url: String::new(),
            mention_token: String::new(),
        }
    }

    /// Whether announcements for this category ping a role.
    pub fn has_mention(&self) -> bool {
        !self.mention_token.is_empty()
    }
}
