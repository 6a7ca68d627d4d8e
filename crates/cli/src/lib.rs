pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dinescore_core::config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};

use crate::commands::rate::RateOptions;
use crate::commands::CommandResult;

pub const CONFIG_FAILURE_EXIT_CODE: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "dinescore",
    about = "Rate a restaurant from its free-text reviews",
    long_about = "Extract the restaurant name from a natural-language query, score its reviews for food and service, and print the overall rating on a 0-10 scale.",
    after_help = "Examples:\n  dinescore \"Quão bom é o restaurante Bistro Azul?\"\n  dinescore --reviews data/restaurantes.txt \"Qual é a avaliação média do Cantina Roma?\"\n  dinescore --json --via-tools \"Quão bom é o restaurante Bistro Azul?\""
)]
pub struct Cli {
    #[arg(help = "Natural-language query naming the restaurant")]
    query: String,
    #[arg(
        long,
        value_name = "PATH",
        help = "Config file (default: dinescore.toml or config/dinescore.toml)"
    )]
    config: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "Review source file (overrides reviews.path)")]
    reviews: Option<PathBuf>,
    #[arg(long, value_name = "LEVEL", help = "Log level: trace|debug|info|warn|error")]
    log_level: Option<String>,
    #[arg(long, value_name = "FORMAT", help = "Log format: compact|pretty|json")]
    log_format: Option<LogFormat>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    json: bool,
    #[arg(long, help = "Also replay the agent tool hand-off and log its transcript")]
    via_tools: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            reviews_path: self.reviews.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format,
        }
    }
}

/// Layers defaults, config file, `DINESCORE_*` env vars, then command-line overrides.
pub fn load_config(
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
) -> Result<AppConfig, ConfigError> {
    AppConfig::load(LoadOptions { config_path, overrides })
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let overrides = cli.overrides();
    let options = RateOptions { query: cli.query, json: cli.json, via_tools: cli.via_tools };

    let result = match load_config(cli.config, overrides) {
        Ok(config) => {
            logging::init(&config.logging);
            commands::rate::run(&options, &config)
        }
        Err(error) if options.json => CommandResult::failure(
            "rate",
            "config_validation",
            format!("configuration issue: {error}"),
            CONFIG_FAILURE_EXIT_CODE,
        ),
        Err(error) => CommandResult::plain(
            CONFIG_FAILURE_EXIT_CODE,
            format!("configuration issue: {error}"),
        ),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
