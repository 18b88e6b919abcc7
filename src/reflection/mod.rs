//! Pseudo-reflection of parameter names.
//!
//! Recovers the ordered list of declared parameter names of a [`Callable`],
//! either from its explicit parameter declaration or by pattern matching its
//! literal declaration text.
//!
//! ## Pipeline
//!
//! 1. Declared arity of zero returns an empty list immediately.
//! 2. An explicit parameter declaration is returned as-is.
//! 3. Comments are stripped from the source text.
//! 4. The text is classified as bracketed or bare-arrow ([`patterns::classify`]).
//! 5. The form's pattern captures the raw parameter list, or reflection fails
//!    with [`Error::Parse`].
//! 6. The capture is split on commas and each token normalized
//!    ([`normalize::normalize_parameter`]).
//!
//! Default-valued and rest parameters never appear in the result.
//!
//! ```rust
//! use electrolyte_decorator::core::Component;
//! use electrolyte_decorator::reflection::reflect_arguments;
//!
//! let component = Component::from_source("service", "function (config, _db_) {}");
//! assert_eq!(reflect_arguments(&component).unwrap(), vec!["config", "db"]);
//! ```

pub mod normalize;
pub mod patterns;

pub use normalize::{normalize_parameter, unwrap_marker, DEFAULT_MARKER};
pub use patterns::{classify, strip_comments, DeclarationForm};

use crate::config::ReflectionSettings;
use crate::core::{Callable, ParameterNameList};
use crate::errors::{Error, Result};
use tracing::{debug, debug_span, trace};

const ANONYMOUS: &str = "<anonymous>";

/// Reflect parameter names using the default [`SignatureParser`].
pub fn reflect_arguments<C: Callable + ?Sized>(callable: &C) -> Result<ParameterNameList> {
    SignatureParser::default().reflect_arguments(callable)
}

/// Extracts parameter names from callables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureParser {
    marker: char,
}

impl Default for SignatureParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureParser {
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }

    /// Use `marker` instead of `_` as the collision-avoidance wrapper.
    pub fn with_marker(marker: char) -> Self {
        Self { marker }
    }

    pub fn from_settings(settings: &ReflectionSettings) -> Self {
        Self::with_marker(settings.marker)
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn reflect_arguments<C: Callable + ?Sized>(&self, callable: &C) -> Result<ParameterNameList> {
        let key = callable.key();
        let _span = debug_span!("reflect_arguments", callable = %key).entered();

        if callable.arity() == Some(0) {
            trace!("zero arity, skipping source inspection");
            return Ok(Vec::new());
        }

        if let Some(declared) = callable.declared_parameters() {
            trace!(count = declared.len(), "using explicit parameter declaration");
            return Ok(declared.to_vec());
        }

        let source = callable
            .source_text()
            .ok_or_else(|| Error::parse(key.as_str(), "source text unavailable"))?;

        self.parse_declaration(key.as_str(), &source)
    }

    /// Reflect parameter names directly from declaration text. Arity is
    /// treated as unknown, so the text is always inspected.
    pub fn reflect_source(&self, source: &str) -> Result<ParameterNameList> {
        self.parse_declaration(ANONYMOUS, source)
    }

    fn parse_declaration(&self, name: &str, source: &str) -> Result<ParameterNameList> {
        let text = strip_comments(source);
        let form = classify(&text);

        let captured = form.capture(&text).ok_or_else(|| {
            Error::parse(
                name,
                format!("no {} parameter list found in declaration", form),
            )
        })?;

        let names: ParameterNameList = patterns::split_arguments(captured)
            .filter_map(|raw| normalize_parameter(raw, self.marker))
            .collect();

        debug!(%form, parameters = ?names, "reflected parameter names");
        Ok(names)
    }
}
