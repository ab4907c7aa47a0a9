use anyhow::Result;
use clap::Parser;

use dirlist::cli::{Cli, Command};
use dirlist::commands;
use dirlist::config::Config;
use dirlist::tui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so its logs must not reach stderr.
    let interactive = matches!(cli.command, Command::Tui(_));
    init_logging(cli.verbose, cli.quiet, interactive);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    // Dispatch to subcommand
    match cli.command {
        Command::List(args) => {
            tracing::info!(?args, "Starting list");
            commands::list::run(args, &config, cli.quiet)?;
        }
        Command::Rtf(args) => {
            tracing::info!(?args, "Starting rtf");
            commands::rtf::run(args, &config, cli.quiet)?;
        }
        Command::Tui(args) => {
            let mut app = App::from_config(&config);
            if args.files {
                app.include_files = true;
            }
            dirlist::tui::run(app, args.path)?;
        }
        Command::Completions(args) => {
            commands::completions::run(args.shell);
        }
        Command::Man => {
            commands::completions::run_man()?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool, interactive: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirlist={}", level)));

    let layer = fmt::layer().with_target(false);
    if interactive {
        tracing_subscriber::registry()
            .with(layer.with_writer(std::io::sink))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(layer.with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}
