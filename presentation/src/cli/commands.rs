//! CLI command definitions

use clap::{Parser, ValueEnum};
use petname_domain::NameStyle;
use std::path::PathBuf;

/// Output format for a generated name
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Name, explanation, fun fact and nicknames
    Full,
    /// Only the name
    Name,
    /// JSON output
    Json,
}

impl From<OutputFormat> for petname_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => petname_domain::OutputFormat::Full,
            OutputFormat::Name => petname_domain::OutputFormat::Name,
            OutputFormat::Json => petname_domain::OutputFormat::Json,
        }
    }
}

fn parse_style(s: &str) -> Result<NameStyle, String> {
    s.parse().map_err(|e: petname_domain::DomainError| e.to_string())
}

/// CLI arguments for petname
#[derive(Parser, Debug)]
#[command(name = "petname")]
#[command(author, version, about = "Pet Name Studio - name your pet with a language model")]
#[command(long_about = r#"
Pet Name Studio asks a language model for a fitting name for your pet,
with an explanation, a fun fact and a few nicknames.

The API key is read from OPENAI_API_KEY (or the variable named by
provider.api_key_env). A .env file in the current directory is honoured.

Configuration files are loaded from (in priority order):
1. PETNAME_* environment variables   e.g. PETNAME_PROVIDER__MODEL=gpt-4o
2. --config <path>                    Explicit config file
3. ./petname.toml                     Project-level config
4. ~/.config/petname-studio/config.toml   Global config

Example:
  petname --pet dog --color brown --trait playful
  petname -p "guinea pig" -c golden -s foodie --creativity 0.9
  petname --studio
"#)]
pub struct Cli {
    /// Type of pet (cat, dog, parrot, ...)
    #[arg(short, long, value_name = "TYPE")]
    pub pet: Option<String>,

    /// Color of the pet
    #[arg(short, long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Personality trait (repeatable, or comma separated)
    #[arg(short = 't', long = "trait", value_name = "TRAIT", value_delimiter = ',')]
    pub traits: Vec<String>,

    /// Naming style: classic, cute, funny, elegant, mythical, foodie, unique
    #[arg(short, long, value_parser = parse_style)]
    pub style: Option<NameStyle>,

    /// Creativity level from 0.0 to 1.0 (default: 0.7)
    #[arg(long, value_name = "LEVEL")]
    pub creativity: Option<f32>,

    /// Start the interactive studio
    #[arg(long)]
    pub studio: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
