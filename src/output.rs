//! Rendering of attached metadata for a downstream container or a terminal.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as _;
use tracing::warn;

use crate::config::AnnotationKeys;
use crate::core::CallableKey;
use crate::errors::Result;
use crate::annotations::{AnnotationKey, AnnotationValue};
use crate::registry::AttachedMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON using namespaced annotation keys
    #[default]
    Json,
    /// One `key = value` line per annotation
    Plain,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    callable: &'a CallableKey,
    metadata: Map<String, Value>,
}

/// Entries to render. Custom keys that would reuse a built-in wire name are
/// left out so they never replace the built-in value.
fn visible_entries<'m>(
    metadata: &'m AttachedMetadata,
    keys: &'m AnnotationKeys,
) -> impl Iterator<Item = (&'m AnnotationKey, &'m AnnotationValue)> {
    metadata.iter().filter(move |(key, _)| {
        let shadows = key.shadows_builtin(keys);
        if shadows {
            warn!(key = %key.wire_name(keys), "skipping custom annotation that shadows a built-in key");
        }
        !shadows
    })
}

/// Annotation map keyed by wire names, e.g. `{"@require": ["db"], "@singleton": true}`.
pub fn metadata_to_json(metadata: &AttachedMetadata, keys: &AnnotationKeys) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for (key, value) in visible_entries(metadata, keys) {
        map.insert(key.wire_name(keys), serde_json::to_value(value)?);
    }
    Ok(map)
}

pub fn render_json(key: &CallableKey, metadata: &AttachedMetadata, keys: &AnnotationKeys) -> Result<String> {
    let report = Report {
        callable: key,
        metadata: metadata_to_json(metadata, keys)?,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn render_plain(key: &CallableKey, metadata: &AttachedMetadata, keys: &AnnotationKeys) -> String {
    let mut out = format!("{}\n", key);
    for (annotation, value) in visible_entries(metadata, keys) {
        let _ = writeln!(out, "  {} = {}", annotation.wire_name(keys), value);
    }
    out
}

pub fn render(
    format: OutputFormat,
    key: &CallableKey,
    metadata: &AttachedMetadata,
    keys: &AnnotationKeys,
) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(key, metadata, keys),
        OutputFormat::Plain => Ok(render_plain(key, metadata, keys)),
    }
}
