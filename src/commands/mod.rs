//! CLI command implementations.
//!
//! Available commands:
//! - **reflect**: Reflect a declaration and print the annotations it would carry
//! - **init**: Initialize a new `.electrolyte.toml` configuration file

pub mod init;
pub mod reflect;

pub use init::init_config;
pub use reflect::{handle_reflect, ReflectConfig};
