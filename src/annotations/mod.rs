//! Annotation fragments and the factories that produce them.
//!
//! A fragment is a small key/value map. Factories are zero-argument
//! functions returning one fragment each; the decorator runs them in order
//! and merges their output, later keys overriding earlier ones.
//!
//! ```rust
//! use electrolyte_decorator::annotations::{depends_on, singleton, AnnotationKey};
//!
//! let mut fragment = depends_on(["config"]);
//! fragment.merge_from(singleton());
//! assert_eq!(fragment.len(), 2);
//! assert!(fragment.get(&AnnotationKey::Singleton).is_some());
//! ```

mod fragment;

pub use fragment::{AnnotationFragment, AnnotationKey, AnnotationValue};

/// Zero-argument producer of one [`AnnotationFragment`].
///
/// Implemented for every `Fn() -> AnnotationFragment`, so plain functions
/// such as [`singleton`] and closures from [`depends_on_factory`] can be
/// passed to the decorator side by side.
pub trait AnnotationFactory {
    fn produce(&self) -> AnnotationFragment;
}

impl<F> AnnotationFactory for F
where
    F: Fn() -> AnnotationFragment,
{
    fn produce(&self) -> AnnotationFragment {
        self()
    }
}

/// `{ requires: names }`
///
/// The decorator applies this implicitly with the reflected parameter
/// names; calling it directly is rarely needed.
pub fn depends_on<I, S>(names: I) -> AnnotationFragment
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AnnotationFragment::single(
        AnnotationKey::Requires,
        AnnotationValue::Names(names.into_iter().map(Into::into).collect()),
    )
}

/// `{ singleton: true }`
pub fn singleton() -> AnnotationFragment {
    AnnotationFragment::single(AnnotationKey::Singleton, AnnotationValue::Flag(true))
}

/// Boolean flag under a caller-defined key.
pub fn custom_flag(name: impl Into<String>, value: bool) -> AnnotationFragment {
    AnnotationFragment::single(AnnotationKey::Custom(name.into()), AnnotationValue::Flag(value))
}

/// Adapt [`depends_on`] to the zero-argument factory contract.
pub fn depends_on_factory<I, S>(names: I) -> impl Fn() -> AnnotationFragment
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    move || depends_on(names.iter().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_depends_on_keeps_order() {
        let fragment = depends_on(["config", "db", "config"]);
        assert_eq!(
            fragment.get(&AnnotationKey::Requires),
            Some(&AnnotationValue::Names(vec![
                "config".into(),
                "db".into(),
                "config".into()
            ]))
        );
        assert_eq!(fragment.len(), 1);
    }

    #[test]
    fn test_singleton_fragment() {
        let fragment = singleton();
        assert_eq!(
            fragment.get(&AnnotationKey::Singleton),
            Some(&AnnotationValue::Flag(true))
        );
        assert_eq!(fragment.len(), 1);
    }

    #[test]
    fn test_factories_are_repeatable() {
        let factory = depends_on_factory(vec!["x".to_string()]);
        assert_eq!(factory.produce(), factory.produce());
        assert_eq!(factory.produce(), depends_on(["x"]));
    }

    #[test]
    fn test_plain_function_is_a_factory() {
        let factories: [&dyn AnnotationFactory; 2] = [&singleton, &|| custom_flag("lazy", false)];
        let produced: Vec<AnnotationFragment> = factories.iter().map(|f| f.produce()).collect();
        assert_eq!(produced[0], singleton());
        assert_eq!(
            produced[1].get(&AnnotationKey::Custom("lazy".into())),
            Some(&AnnotationValue::Flag(false))
        );
    }
}
