//! Attach dependency-injection annotations to callables.
//!
//! [`decorate`] reflects the parameter names of a callable, runs every
//! caller-supplied [`AnnotationFactory`], appends an implicit
//! [`depends_on_factory`] built from the reflected names, and merges the
//! produced fragments in that order onto the callable's record in a
//! [`MetadataRegistry`]. Because the implicit factory runs last, its
//! `requires` key always overrides one supplied by the caller. Caller keys
//! spelled like a configured built-in name (`custom_flag("require", ..)`)
//! are folded into the built-in key first, so they are overridden too.
//!
//! ```rust
//! use electrolyte_decorator::annotations::singleton;
//! use electrolyte_decorator::core::Component;
//! use electrolyte_decorator::decorator::decorate;
//! use electrolyte_decorator::registry::MetadataRegistry;
//!
//! let registry = MetadataRegistry::new();
//! let cache = Component::from_source("cache", "function (config, redis) {}");
//!
//! decorate(&registry, &cache, &[&singleton]).unwrap();
//!
//! let metadata = registry.metadata_for(&cache).unwrap();
//! assert_eq!(metadata.requires().unwrap(), ["config", "redis"]);
//! assert!(metadata.is_singleton());
//! ```

use std::sync::Arc;
use tracing::{debug, debug_span};

use crate::annotations::{depends_on_factory, AnnotationFactory, AnnotationFragment};
use crate::config::{AnnotationKeys, DecoratorConfig};
use crate::core::Callable;
use crate::errors::Result;
use crate::reflection::SignatureParser;
use crate::registry::{AttachedMetadata, MetadataRegistry};

/// Decorate `callable` with the default [`SignatureParser`].
pub fn decorate<'c, C: Callable + ?Sized>(
    registry: &MetadataRegistry,
    callable: &'c C,
    factories: &[&dyn AnnotationFactory],
) -> Result<&'c C> {
    Decorator::new(registry).decorate(callable, factories)
}

/// Writes merged annotations into a registry.
#[derive(Debug, Clone)]
pub struct Decorator<'r> {
    registry: &'r MetadataRegistry,
    parser: SignatureParser,
    keys: AnnotationKeys,
}

impl<'r> Decorator<'r> {
    pub fn new(registry: &'r MetadataRegistry) -> Self {
        Self {
            registry,
            parser: SignatureParser::default(),
            keys: AnnotationKeys::default(),
        }
    }

    pub fn with_config(registry: &'r MetadataRegistry, config: &DecoratorConfig) -> Self {
        Self::new(registry)
            .with_parser(SignatureParser::from_settings(&config.reflection))
            .with_keys(config.annotations.clone())
    }

    /// Key names used to recognise caller keys that shadow a built-in key.
    pub fn with_keys(mut self, keys: AnnotationKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_parser(mut self, parser: SignatureParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn parser(&self) -> &SignatureParser {
        &self.parser
    }

    /// Reflect, run factories, merge and store. Returns the same callable.
    ///
    /// A reflection failure is returned before anything is written, leaving
    /// any existing record untouched.
    pub fn decorate<'c, C: Callable + ?Sized>(
        &self,
        callable: &'c C,
        factories: &[&dyn AnnotationFactory],
    ) -> Result<&'c C> {
        self.attach(callable, factories)?;
        Ok(callable)
    }

    /// Same as [`Decorator::decorate`] but returns the stored record.
    pub fn attach<C: Callable + ?Sized>(
        &self,
        callable: &C,
        factories: &[&dyn AnnotationFactory],
    ) -> Result<Arc<AttachedMetadata>> {
        let key = callable.key();
        let _span = debug_span!("decorate", callable = %key).entered();

        let parameters = self.parser.reflect_arguments(callable)?;
        let implicit = depends_on_factory(parameters);

        // Caller factories first, reflected dependencies last.
        let mut fragments: Vec<AnnotationFragment> = factories
            .iter()
            .map(|factory| factory.produce().canonicalized(&self.keys))
            .collect();
        fragments.push(implicit.produce());

        debug!(fragments = fragments.len(), "merging annotation fragments");
        Ok(self.registry.update(key, fragments))
    }
}
