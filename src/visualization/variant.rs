//! Mapping from host identity tags to the wireframe shape drawn for them.

use std::collections::HashMap;

use crate::gfx::geometry::RenderVariant;

/// Lookup table deciding which [`RenderVariant`] a collider renders with.
///
/// Colliders without a tag, or with a tag that isn't registered, render as boxes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantTable {
    entries: HashMap<u32, RenderVariant>,
}

impl VariantTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `tag` to render as a prism
    ///
    /// # Arguments
    ///
    /// * `tag` - Host identity tag of the round trigger objects
    pub fn with_prism_tag(mut self, tag: u32) -> Self {
        self.insert(tag, RenderVariant::Prism);
        self
    }

    /// Register or replace the variant for `tag`
    ///
    /// # Arguments
    ///
    /// * `tag` - Host identity tag
    /// * `variant` - Wireframe shape to draw for colliders with that tag
    ///
    /// # Returns
    ///
    /// The variant previously registered for `tag`, if any
    pub fn insert(&mut self, tag: u32, variant: RenderVariant) -> Option<RenderVariant> {
        self.entries.insert(tag, variant)
    }

    /// Remove the entry for `tag`
    pub fn remove(&mut self, tag: u32) -> Option<RenderVariant> {
        self.entries.remove(&tag)
    }

    /// Variant for a collider with the given tag
    pub fn classify(&self, tag: Option<u32>) -> RenderVariant {
        tag.and_then(|tag| self.entries.get(&tag).copied())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
