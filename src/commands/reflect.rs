use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::annotations::{depends_on_factory, singleton, AnnotationFactory};
use crate::config::{load_config, load_config_from, DecoratorConfig};
use crate::core::{Callable, Component};
use crate::decorator::Decorator;
use crate::output::{render, OutputFormat};
use crate::registry::MetadataRegistry;

const STDIN_MARKER: &str = "-";
const STDIN_NAME: &str = "stdin";

/// Options of the `reflect` command
#[derive(Debug, Clone)]
pub struct ReflectConfig {
    pub input: PathBuf,
    pub name: Option<String>,
    pub arity: Option<usize>,
    pub singleton: bool,
    pub depends_on: Option<Vec<String>>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

pub fn handle_reflect(options: ReflectConfig) -> Result<()> {
    let settings = resolve_config(options.config.as_deref())?;
    let source = read_input(&options.input)?;
    let rendered = reflect_to_string(&options, &settings, source)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Decorate the declaration in `source` and render the result.
pub fn reflect_to_string(
    options: &ReflectConfig,
    settings: &DecoratorConfig,
    source: String,
) -> Result<String> {
    let name = options
        .name
        .clone()
        .unwrap_or_else(|| component_name(&options.input));

    let mut component = Component::from_source(name, source);
    if let Some(arity) = options.arity {
        component = component.with_arity(arity);
    }

    let explicit = options.depends_on.clone().map(depends_on_factory);
    let singleton_factory = singleton;
    let mut factories: Vec<&dyn AnnotationFactory> = Vec::new();
    if let Some(explicit) = &explicit {
        factories.push(explicit);
    }
    if options.singleton {
        factories.push(&singleton_factory);
    }

    let registry = MetadataRegistry::new();
    let metadata = Decorator::with_config(&registry, settings).attach(&component, &factories)?;

    Ok(render(
        options.format,
        &component.key(),
        &metadata,
        &settings.annotations,
    )?)
}

fn resolve_config(path: Option<&Path>) -> Result<DecoratorConfig> {
    match path {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == STDIN_MARKER {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read declaration from stdin")?;
        return Ok(source);
    }

    debug!("Reading declaration from {}", input.display());
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))
}

fn component_name(input: &Path) -> String {
    if input.as_os_str() == STDIN_MARKER {
        return STDIN_NAME.to_string();
    }
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| STDIN_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn options(input: &str) -> ReflectConfig {
        ReflectConfig {
            input: PathBuf::from(input),
            name: None,
            arity: None,
            singleton: false,
            depends_on: None,
            format: OutputFormat::Json,
            config: None,
        }
    }

    #[test]
    fn test_component_name_from_file_stem() {
        assert_eq!(component_name(Path::new("src/user_service.js")), "user_service");
        assert_eq!(component_name(Path::new("-")), "stdin");
    }

    #[test]
    fn test_reflect_to_json() {
        let mut opts = options("cache.js");
        opts.singleton = true;
        opts.depends_on = Some(vec!["ignored".into()]);

        let rendered = reflect_to_string(
            &opts,
            &DecoratorConfig::default(),
            "function (config, _redis_) {}".into(),
        )
        .unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["callable"], "cache");
        assert_eq!(value["metadata"]["@require"], serde_json::json!(["config", "redis"]));
        assert_eq!(value["metadata"]["@singleton"], true);
    }

    #[test]
    fn test_reflect_zero_arity_ignores_source() {
        let mut opts = options("noop.js");
        opts.arity = Some(0);
        opts.format = OutputFormat::Plain;

        let rendered =
            reflect_to_string(&opts, &DecoratorConfig::default(), "[native code]".into()).unwrap();
        assert_eq!(rendered, "noop\n  @require = []\n");
    }

    #[test]
    fn test_reflect_unrecognized_shape_fails() {
        let err = reflect_to_string(
            &options("native.js"),
            &DecoratorConfig::default(),
            "[native code]".into(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Parse error in `native`"));
    }
}
