use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::config::AnnotationKeys;

/// Key of one annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKey {
    /// Ordered names of the components to inject.
    Requires,
    /// Only one instance should live in the managing container.
    Singleton,
    /// Caller-defined annotation kind.
    Custom(String),
}

impl AnnotationKey {
    /// Bare key name, before namespacing.
    pub fn name<'a>(&'a self, keys: &'a AnnotationKeys) -> &'a str {
        match self {
            Self::Requires => &keys.require,
            Self::Singleton => &keys.singleton,
            Self::Custom(name) => name,
        }
    }

    /// Namespaced name a downstream container reads, e.g. `@require`.
    pub fn wire_name(&self, keys: &AnnotationKeys) -> String {
        keys.qualify(self.name(keys))
    }

    /// Whether this is a custom key spelled like one of the built-in keys
    /// under `keys`.
    pub fn shadows_builtin(&self, keys: &AnnotationKeys) -> bool {
        matches!(self, Self::Custom(name) if *name == keys.require || *name == keys.singleton)
    }

    /// Map a custom key named like a built-in key under `keys` onto that
    /// built-in key. Other keys are returned unchanged.
    pub fn canonical(self, keys: &AnnotationKeys) -> Self {
        match self {
            Self::Custom(name) if name == keys.require => Self::Requires,
            Self::Custom(name) if name == keys.singleton => Self::Singleton,
            other => other,
        }
    }
}

/// Value of one annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationValue {
    Names(Vec<String>),
    Flag(bool),
}

impl AnnotationValue {
    pub fn as_names(&self) -> Option<&[String]> {
        match self {
            Self::Names(names) => Some(names),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            Self::Names(_) => None,
        }
    }
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Names(names) => write!(f, "[{}]", names.join(", ")),
            Self::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

/// Mapping from annotation keys to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationFragment {
    entries: BTreeMap<AnnotationKey, AnnotationValue>,
}

impl AnnotationFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(key: AnnotationKey, value: AnnotationValue) -> Self {
        let mut fragment = Self::new();
        fragment.insert(key, value);
        fragment
    }

    /// Insert, returning the value previously stored under `key`.
    pub fn insert(&mut self, key: AnnotationKey, value: AnnotationValue) -> Option<AnnotationValue> {
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: &AnnotationKey) -> Option<&AnnotationValue> {
        self.entries.get(key)
    }

    /// Shallow, key-wise merge: every key in `other` overwrites the value
    /// held here. Collection values are replaced, never concatenated.
    pub fn merge_from(&mut self, other: AnnotationFragment) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, AnnotationKey, AnnotationValue> {
        self.entries.iter()
    }

    /// Rewrite every key through [`AnnotationKey::canonical`], so a custom
    /// `require` entry merges into the built-in `requires` slot.
    pub fn canonicalized(self, keys: &AnnotationKeys) -> Self {
        self.into_iter()
            .map(|(key, value)| (key.canonical(keys), value))
            .collect()
    }
}

impl IntoIterator for AnnotationFragment {
    type Item = (AnnotationKey, AnnotationValue);
    type IntoIter = btree_map::IntoIter<AnnotationKey, AnnotationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationFragment {
    type Item = (&'a AnnotationKey, &'a AnnotationValue);
    type IntoIter = btree_map::Iter<'a, AnnotationKey, AnnotationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(AnnotationKey, AnnotationValue)> for AnnotationFragment {
    fn from_iter<T: IntoIterator<Item = (AnnotationKey, AnnotationValue)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
