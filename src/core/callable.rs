use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Ordered parameter names, one per statically extractable formal parameter.
pub type ParameterNameList = Vec<String>;

/// Stable identity of a callable, used as the key of the metadata side-table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallableKey(String);

impl CallableKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallableKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CallableKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A unit of behavior whose parameter names can be reflected.
///
/// Implementors expose either the literal declaration text of the callable,
/// an explicit parameter declaration, or both. When both are present the
/// explicit declaration is authoritative.
pub trait Callable {
    /// Identity under which attached metadata is stored.
    fn key(&self) -> CallableKey;

    /// Declared arity, or `None` when it is not known up front. An arity of
    /// zero short-circuits reflection without looking at any source text.
    fn arity(&self) -> Option<usize>;

    /// Literal declaration text, e.g. `function (config, db) { ... }`.
    fn source_text(&self) -> Option<Cow<'_, str>>;

    /// Structured parameter declaration supplied by the caller.
    fn declared_parameters(&self) -> Option<&[String]> {
        None
    }
}

/// Concrete [`Callable`] describing a component factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    key: CallableKey,
    arity: Option<usize>,
    source: Option<String>,
    parameters: Option<Vec<String>>,
}

impl Component {
    /// A component known only by its declaration text. Arity is unknown, so
    /// reflection always inspects the text.
    pub fn from_source(key: impl Into<CallableKey>, source: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            arity: None,
            source: Some(source.into()),
            parameters: None,
        }
    }

    /// A component whose parameters are declared explicitly.
    pub fn declared<I, S>(key: impl Into<CallableKey>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parameters: Vec<String> = parameters.into_iter().map(Into::into).collect();
        Self {
            key: key.into(),
            arity: Some(parameters.len()),
            source: None,
            parameters: Some(parameters),
        }
    }

    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Callable for Component {
    fn key(&self) -> CallableKey {
        self.key.clone()
    }

    fn arity(&self) -> Option<usize> {
        self.arity
    }

    fn source_text(&self) -> Option<Cow<'_, str>> {
        self.source.as_deref().map(Cow::Borrowed)
    }

    fn declared_parameters(&self) -> Option<&[String]> {
        self.parameters.as_deref()
    }
}

impl<T: Callable + ?Sized> Callable for &T {
    fn key(&self) -> CallableKey {
        (**self).key()
    }

    fn arity(&self) -> Option<usize> {
        (**self).arity()
    }

    fn source_text(&self) -> Option<Cow<'_, str>> {
        (**self).source_text()
    }

    fn declared_parameters(&self) -> Option<&[String]> {
        (**self).declared_parameters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_source_has_unknown_arity() {
        let component = Component::from_source("db", "function (config) {}");
        assert_eq!(component.arity(), None);
        assert_eq!(component.key().as_str(), "db");
        assert_eq!(
            component.source_text().as_deref(),
            Some("function (config) {}")
        );
        assert!(component.declared_parameters().is_none());
    }

    #[test]
    fn test_declared_sets_arity_from_parameters() {
        let component = Component::declared("service", ["config", "db"]);
        assert_eq!(component.arity(), Some(2));
        assert!(component.source_text().is_none());
        assert_eq!(
            component.declared_parameters(),
            Some(&["config".to_string(), "db".to_string()][..])
        );
    }

    #[test]
    fn test_with_arity_overrides() {
        let component = Component::from_source("noop", "function () {}").with_arity(0);
        assert_eq!(component.arity(), Some(0));
    }

    #[test]
    fn test_callable_key_display() {
        let key = CallableKey::from("logger");
        assert_eq!(key.to_string(), "logger");
    }
}
