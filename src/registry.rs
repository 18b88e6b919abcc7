//! Side-table of annotation metadata keyed by callable identity.
//!
//! Callables never carry their own metadata. Each decoration produces a new
//! immutable [`AttachedMetadata`] record which replaces the previous record
//! for the same [`CallableKey`]. Records are shared as `Arc`s so readers keep
//! a consistent snapshot while a later decoration is stored.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::trace;

use crate::annotations::{AnnotationFragment, AnnotationKey, AnnotationValue};
use crate::core::{Callable, CallableKey};

/// Merged annotations attached to one callable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachedMetadata {
    annotations: AnnotationFragment,
}

impl AttachedMetadata {
    /// New record holding this record's annotations overlaid with
    /// `fragments`, applied in order.
    pub fn merged_with<I>(&self, fragments: I) -> Self
    where
        I: IntoIterator<Item = AnnotationFragment>,
    {
        let mut annotations = self.annotations.clone();
        for fragment in fragments {
            annotations.merge_from(fragment);
        }
        Self { annotations }
    }

    /// Names of the components to inject, in parameter order.
    pub fn requires(&self) -> Option<&[String]> {
        self.get(&AnnotationKey::Requires)
            .and_then(AnnotationValue::as_names)
    }

    pub fn is_singleton(&self) -> bool {
        self.get(&AnnotationKey::Singleton)
            .and_then(AnnotationValue::as_flag)
            .unwrap_or(false)
    }

    pub fn get(&self, key: &AnnotationKey) -> Option<&AnnotationValue> {
        self.annotations.get(key)
    }

    pub fn annotations(&self) -> &AnnotationFragment {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnnotationKey, &AnnotationValue)> {
        self.annotations.iter()
    }
}

impl From<AnnotationFragment> for AttachedMetadata {
    fn from(annotations: AnnotationFragment) -> Self {
        Self { annotations }
    }
}

/// Concurrent map from callable identity to its attached metadata.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    entries: DashMap<CallableKey, Arc<AttachedMetadata>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metadata(&self, key: &CallableKey) -> Option<Arc<AttachedMetadata>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn metadata_for<C: Callable + ?Sized>(&self, callable: &C) -> Option<Arc<AttachedMetadata>> {
        self.metadata(&callable.key())
    }

    pub fn contains(&self, key: &CallableKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys of all decorated callables, sorted.
    pub fn keys(&self) -> Vec<CallableKey> {
        let mut keys: Vec<CallableKey> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }

    /// Merge `fragments` onto the record stored for `key`, creating an empty
    /// record first if none exists. The entry stays locked for the whole
    /// read-modify-write, so concurrent updates to one key serialize while
    /// distinct keys proceed independently.
    pub fn update<I>(&self, key: CallableKey, fragments: I) -> Arc<AttachedMetadata>
    where
        I: IntoIterator<Item = AnnotationFragment>,
    {
        let mut entry = self.entries.entry(key).or_default();
        let merged = Arc::new(entry.value().merged_with(fragments));
        trace!(callable = %entry.key(), annotations = merged.len(), "stored metadata");
        *entry.value_mut() = Arc::clone(&merged);
        merged
    }
}
