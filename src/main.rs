use anyhow::Result;
use electrolyte_decorator::cli::{init_logging, parse_args, Commands};
use electrolyte_decorator::commands::{handle_reflect, init_config, ReflectConfig};

fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Reflect {
            input,
            name,
            arity,
            singleton,
            depends_on,
            format,
            config,
        } => handle_reflect(ReflectConfig {
            input,
            name,
            arity,
            singleton,
            depends_on,
            format,
            config,
        }),
        Commands::Init { force } => init_config(force),
    }
}
