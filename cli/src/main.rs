//! CLI entrypoint for Pet Name Studio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use petname_application::{GenerationForm, PetNameStudio, StudioAction, StudioOutcome};
use petname_domain::OutputFormat;
use petname_infrastructure::{ConfigLoader, OpenAiGateway};
use petname_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, StudioRepl};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Pet Name Studio");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    for warning in config.validate() {
        warn!("{}", warning);
    }

    // === Dependency Injection ===
    // A missing API key stops here, before any UI is shown
    let gateway = Arc::new(OpenAiGateway::from_config(&config.provider)?);
    info!("Using {}", gateway.model());

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // CLI flags take precedence over config file values
    let (creativity, _) = config.generation.parse_creativity();
    let style = cli.style.unwrap_or(config.generation.style);
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let show_progress = !cli.quiet && config.studio.show_progress;

    // Interactive studio
    if cli.studio {
        let history_path = config
            .studio
            .history_path()
            .or_else(ConfigLoader::default_history_path);

        let creativity = match cli.creativity {
            Some(value) => petname_domain::Creativity::new(value)?,
            None => creativity,
        };

        let mut repl = StudioRepl::new(gateway)
            .with_style(style)
            .with_creativity(creativity)
            .with_format(format)
            .with_progress(show_progress)
            .with_history_file(history_path);

        repl.run().await?;
        return Ok(());
    }

    // One-shot mode - pet and color are required
    let (pet, color) = match (cli.pet, cli.color) {
        (Some(pet), Some(color)) => (pet, color),
        _ => bail!("--pet and --color are required. Use --studio for interactive mode."),
    };

    let form = GenerationForm::new(pet, color)
        .with_traits(cli.traits)
        .with_style(style)
        .with_creativity(cli.creativity.unwrap_or(creativity.value()));

    let mut studio = PetNameStudio::new(gateway);
    let action = StudioAction::Generate(form);
    let outcome = if !show_progress {
        studio.handle(action).await?
    } else if std::io::stderr().is_terminal() {
        studio.handle_with_progress(action, &ProgressReporter::new()).await?
    } else {
        studio.handle_with_progress(action, &SimpleProgress).await?
    };

    if let StudioOutcome::Generated(record) = outcome {
        println!("{}", ConsoleFormatter::format_as(&record, format));
    }

    Ok(())
}
