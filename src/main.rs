//! allscreenshots - command-line entry point.

use clap::Parser;

use allscreenshots::cli::{CaptureArgs, Cli, Commands, ConfigCommands, ServeArgs, UsageArgs};
use allscreenshots::client::AllscreenshotsClient;
use allscreenshots::config::Config;
use allscreenshots::error::exit_code;
use allscreenshots::model::ScreenshotRequest;
use allscreenshots::{AllscreenshotsError, Result};
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::from(exit_code::GENERAL_ERROR as u8);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Initialize the tracing subscriber based on CLI options.
fn init_logging(cli: &Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (level_str, _is_quiet) = cli.log_level();

    let level = match level_str {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .init();

    Ok(())
}

/// Main application logic.
fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Serve(args) => cmd_serve(&cli, args),
        Commands::Capture(args) => cmd_capture(&cli, args),
        Commands::Usage(args) => cmd_usage(&cli, args),
        Commands::Config(subcmd) => cmd_config(&cli, subcmd),
    }
}

/// Handle the `serve` command.
fn cmd_serve(cli: &Cli, args: &ServeArgs) -> Result<()> {
    let mut config = load_config(cli)?;

    // Use CLI args if provided, otherwise fall back to config
    if args.bind != "0.0.0.0" {
        config.server.bind = args.bind.clone();
    }

    if args.port != 8080 {
        config.server.port = args.port;
    }

    tracing::info!(
        bind = %config.server.bind,
        port = %config.server.port,
        base_url = %config.client.base_url,
        "Starting sample web application"
    );

    let runtime = runtime()?;
    runtime.block_on(async { allscreenshots::server::serve(&config).await })
}

/// Handle the `capture` command.
fn cmd_capture(cli: &Cli, args: &CaptureArgs) -> Result<()> {
    let config = load_config(cli)?;

    let mut builder = ScreenshotRequest::builder().url(&args.url);
    if let Some(device) = &args.device {
        builder = builder.device(device);
    }
    if args.full_page {
        builder = builder.full_page(true);
    }
    if let Some(delay) = args.delay {
        builder = builder.delay(delay);
    }
    if args.dark_mode {
        builder = builder.dark_mode(true);
    }
    let request = builder.build()?;

    tracing::info!(url = %args.url, output = %args.output.display(), "Capturing screenshot");

    let runtime = runtime()?;
    let image = runtime.block_on(async {
        let client = AllscreenshotsClient::from_config(&config)?;
        client.screenshots().capture(&request).await
    })?;

    std::fs::write(&args.output, &image)?;
    println!(
        "Saved {} bytes to {}",
        image.len(),
        args.output.display()
    );

    Ok(())
}

/// Handle the `usage` command.
fn cmd_usage(cli: &Cli, args: &UsageArgs) -> Result<()> {
    let config = load_config(cli)?;

    let runtime = runtime()?;
    runtime.block_on(async {
        let client = AllscreenshotsClient::from_config(&config)?;

        if args.quota {
            let quota = client.usage().quota().await?;
            println!("Quota Status");
            println!("============");
            if let Some(tier) = &quota.tier {
                println!("Tier: {}", tier);
            }
            if let Some(screenshots) = &quota.screenshots {
                println!("Screenshots:");
                if let Some(limit) = screenshots.limit {
                    println!("  Limit: {}", limit);
                }
                if let Some(used) = screenshots.used {
                    println!("  Used: {}", used);
                }
                if let Some(remaining) = screenshots.remaining {
                    println!("  Remaining: {}", remaining);
                }
            }
            if let Some(bandwidth) = &quota.bandwidth {
                println!("Bandwidth:");
                if let Some(used) = &bandwidth.used_formatted {
                    println!("  Used: {}", used);
                }
                if let Some(remaining) = &bandwidth.remaining_formatted {
                    println!("  Remaining: {}", remaining);
                }
            }
            if let Some(ends) = &quota.period_ends {
                println!("Period ends: {}", ends);
            }
        } else {
            let usage = client.usage().usage().await?;
            println!("Usage");
            println!("=====");
            if let Some(tier) = &usage.tier {
                println!("Tier: {}", tier);
            }
            if let Some(period) = &usage.current_period {
                println!("Current period:");
                if let Some(count) = period.screenshots_count {
                    println!("  Screenshots: {}", count);
                }
                if let Some(bandwidth) = &period.bandwidth_formatted {
                    println!("  Bandwidth: {}", bandwidth);
                }
            }
            if let Some(totals) = &usage.totals {
                println!("Totals:");
                if let Some(count) = totals.screenshots_count {
                    println!("  Screenshots: {}", count);
                }
                if let Some(bandwidth) = &totals.bandwidth_formatted {
                    println!("  Bandwidth: {}", bandwidth);
                }
            }
        }

        Ok(())
    })
}

/// Handle the `config` subcommand.
fn cmd_config(cli: &Cli, subcmd: &ConfigCommands) -> Result<()> {
    match subcmd {
        ConfigCommands::Validate => {
            let config_path = cli.config.as_deref();
            match Config::load(config_path) {
                Ok(config) => {
                    println!("✓ Configuration is valid");
                    tracing::debug!(?config, "Validated configuration");
                    Ok(())
                }
                Err(e) => {
                    println!("✗ Configuration is invalid: {}", e);
                    Err(e)
                }
            }
        }
        ConfigCommands::Show => {
            let config = load_config(cli)?;
            let yaml = serde_yaml::to_string(&config).map_err(|e| {
                AllscreenshotsError::config_with_source("Failed to serialize configuration", e)
            })?;
            println!("{}", yaml);
            Ok(())
        }
    }
}

/// Load configuration with error handling.
fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = cli.config.as_deref();
    Config::load(config_path)
}

/// Create the tokio runtime for async commands.
fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| AllscreenshotsError::config_with_source("Failed to create async runtime", e))
}
