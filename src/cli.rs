use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "electrolyte-decorator")]
#[command(about = "Reflect dependency-injection annotations from component declarations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    /// -v: Show reflection decisions
    /// -vv: Show every pipeline stage
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reflect parameter names from a declaration and print the annotations it would carry
    Reflect {
        /// File containing the declaration, or `-` to read stdin
        input: PathBuf,

        /// Name the component is registered under (defaults to the file stem)
        #[arg(long)]
        name: Option<String>,

        /// Declared arity; 0 skips source inspection entirely
        #[arg(long)]
        arity: Option<usize>,

        /// Mark the component as a singleton
        #[arg(long)]
        singleton: bool,

        /// Explicit dependencies (always overridden by the reflected names)
        #[arg(long = "depends-on", value_delimiter = ',')]
        depends_on: Option<Vec<String>>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Configuration file (defaults to discovering .electrolyte.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a default .electrolyte.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over
/// the verbosity flag. Logs go to stderr so rendered output stays clean.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("electrolyte_decorator={}", default_level)));

    // Already initialised (e.g. in tests) is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reflect_arguments() {
        let cli = Cli::try_parse_from([
            "electrolyte-decorator",
            "-v",
            "reflect",
            "service.js",
            "--singleton",
            "--depends-on",
            "a,b",
            "--format",
            "plain",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 1);
        match cli.command {
            Commands::Reflect {
                input,
                singleton,
                depends_on,
                format,
                arity,
                ..
            } => {
                assert_eq!(input, PathBuf::from("service.js"));
                assert!(singleton);
                assert_eq!(depends_on, Some(vec!["a".to_string(), "b".to_string()]));
                assert_eq!(format, OutputFormat::Plain);
                assert_eq!(arity, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["electrolyte-decorator", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}
