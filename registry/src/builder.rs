//! RegistryBuilder for constructing an immutable Registry.

use crate::{CategoryMeta, Registry};
use regex_lite::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Shape every category label must have: one bracketed token with no
/// commas or nested brackets, so it survives a round trip through the
/// ledger file untouched.
const LABEL_PATTERN: &str = r"^\[[^\[\],]+\]$";

/// The compiled label pattern, shared by every builder.
fn label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LABEL_PATTERN).expect("label pattern is a valid regex"))
}

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate category label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid category label: {0:?} (expected a bracketed name such as [Formula1])")]
    InvalidLabel(String),
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Categories being built, keyed by label.
    categories: HashMap<String, CategoryMeta>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category definition.
    pub fn add_category(
        &mut self,
        label: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> CategoryBuilder<'_> {
        CategoryBuilder {
            builder: self,
            meta: CategoryMeta::new(label, channel_id),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        Ok(Registry::new(self.categories))
    }
}

/// Builder for a single category definition.
pub struct CategoryBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    meta: CategoryMeta,
}

impl<'a> CategoryBuilder<'a> {
    /// Set the announcement image URL.
    pub fn image(mut self, image_url: impl Into<String>) -> Self {
        self.meta.image_url = image_url.into();
        self
    }

    /// Set the role mention token.
    pub fn mention(mut self, mention_token: impl Into<String>) -> Self {
        self.meta.mention_token = mention_token.into();
        self
    }

    /// Finish building this category.
    pub fn done(self) -> Result<(), RegistryError> {
        if !label_pattern().is_match(&self.meta.label) {
            return Err(RegistryError::InvalidLabel(self.meta.label));
        }

        if self.builder.categories.contains_key(&self.meta.label) {
            return Err(RegistryError::DuplicateLabel(self.meta.label));
        }

        self.builder
            .categories
            .insert(self.meta.label.clone(), self.meta);

        Ok(())
    }
}
