use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Root configuration structure, read from `.electrolyte.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DecoratorConfig {
    /// Wire names of the attached annotation keys
    #[serde(default)]
    pub annotations: AnnotationKeys,

    /// Parameter-name reflection settings
    #[serde(default)]
    pub reflection: ReflectionSettings,
}

impl DecoratorConfig {
    pub fn validate(&self) -> Result<()> {
        self.annotations.validate()
    }
}

/// Names under which annotations are exposed to a downstream container.
///
/// The prefix keeps annotation keys distinguishable from ordinary data
/// attached to the same component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotationKeys {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_require_key")]
    pub require: String,

    #[serde(default = "default_singleton_key")]
    pub singleton: String,
}

impl Default for AnnotationKeys {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            require: default_require_key(),
            singleton: default_singleton_key(),
        }
    }
}

impl AnnotationKeys {
    /// Namespaced wire name for a bare key name.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::Configuration(
                "annotations.prefix must not be empty".into(),
            ));
        }
        if self.require.is_empty() || self.singleton.is_empty() {
            return Err(Error::Configuration(
                "annotation key names must not be empty".into(),
            ));
        }
        if self.require == self.singleton {
            return Err(Error::Configuration(format!(
                "annotations.require and annotations.singleton both map to `{}`",
                self.require
            )));
        }
        Ok(())
    }
}

/// Settings for the signature parser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReflectionSettings {
    /// Marker wrapped around a parameter name to avoid a naming collision
    #[serde(default = "default_marker")]
    pub marker: char,
}

impl Default for ReflectionSettings {
    fn default() -> Self {
        Self {
            marker: default_marker(),
        }
    }
}

pub fn default_prefix() -> String {
    "@".to_string()
}

pub fn default_require_key() -> String {
    "require".to_string()
}

pub fn default_singleton_key() -> String {
    "singleton".to_string()
}

pub fn default_marker() -> char {
    crate::reflection::DEFAULT_MARKER
}
