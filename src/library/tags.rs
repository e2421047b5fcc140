//! Insertion-ordered tag list with ASCII case-insensitive uniqueness.

use super::error::{ValidationError, reject};
use super::model::trim_ws;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tag` (trimmed, original casing kept) unless it is empty or a
    /// case-insensitive duplicate of an existing tag.
    pub fn add(&mut self, tag: &str) -> Result<(), ValidationError> {
        let tag = trim_ws(tag);
        if tag.is_empty() {
            return reject(ValidationError::EmptyTag);
        }
        if self.position(&tag.to_ascii_lowercase()).is_some() {
            return reject(ValidationError::DuplicateTag(tag.to_string()));
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Remove the first tag equal to `tag` ignoring case and surrounding
    /// whitespace. Remaining tags keep their relative order.
    pub fn remove(&mut self, tag: &str) -> Result<(), ValidationError> {
        let wanted = trim_ws(tag).to_ascii_lowercase();
        if wanted.is_empty() {
            return reject(ValidationError::TagNotFound(wanted));
        }
        match self.position(&wanted) {
            Some(i) => {
                self.tags.remove(i);
                Ok(())
            }
            None => reject(ValidationError::TagNotFound(trim_ws(tag).to_string())),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.position(&trim_ws(tag).to_ascii_lowercase()).is_some()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    fn position(&self, lower: &str) -> Option<usize> {
        self.tags
            .iter()
            .position(|t| t.to_ascii_lowercase() == lower)
    }
}
