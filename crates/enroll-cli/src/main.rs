//! Enrollment admin CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use enroll_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use enroll_cli::commands::{api_config, run_add, run_delete, run_list, run_shell, run_update};
use enroll_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = api_config(&cli);
    let result = match cli.command {
        Command::List { resource } => run_list(config, resource).await.map(print_output),
        Command::Add(command) => run_add(config, command).await.map(print_output),
        Command::Update(command) => run_update(config, command).await.map(print_output),
        Command::Delete { resource, id } => {
            run_delete(config, resource, id).await.map(print_output)
        }
        Command::Shell => run_shell(config).await,
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

#[allow(clippy::needless_pass_by_value)]
fn print_output(output: String) {
    println!("{output}");
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
