// Export modules for library usage
pub mod annotations;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod decorator;
pub mod errors;
pub mod output;
pub mod reflection;
pub mod registry;

// Re-export commonly used types
pub use crate::annotations::{
    custom_flag, depends_on, depends_on_factory, singleton, AnnotationFactory, AnnotationFragment,
    AnnotationKey, AnnotationValue,
};
pub use crate::config::{AnnotationKeys, DecoratorConfig, ReflectionSettings};
pub use crate::core::{Callable, CallableKey, Component, ParameterNameList};
pub use crate::decorator::{decorate, Decorator};
pub use crate::errors::{Error, Result};
pub use crate::reflection::{reflect_arguments, DeclarationForm, SignatureParser};
pub use crate::registry::{AttachedMetadata, MetadataRegistry};
