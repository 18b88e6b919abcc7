// Core configuration types
mod core;
mod loader;

pub use self::core::{
    default_marker, default_prefix, default_require_key, default_singleton_key, AnnotationKeys,
    DecoratorConfig, ReflectionSettings,
};
pub use loader::{
    default_config_contents, directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
