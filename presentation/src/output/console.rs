//! Console output formatter for generated names

use colored::Colorize;
use petname_domain::catalog::{NAMING_TIPS, PET_COLORS, PET_TYPES};
use petname_domain::{NameRecord, NameStyle, OutputFormat, SessionStore};

/// Formats records and session state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a record in the requested output format
    pub fn format_as(record: &NameRecord, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(record),
            OutputFormat::Name => Self::format_name_only(record),
            OutputFormat::Json => Self::format_json(record),
        }
    }

    /// Format the complete record
    pub fn format(record: &NameRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "Here's your suggested pet name:".green().bold()
        ));
        output.push_str(&format!("  {}\n", record.name.yellow().bold()));
        output.push_str(&format!(
            "  {}\n\n",
            format!("for your {}", record.source_request.subject()).dimmed()
        ));

        if !record.explanation.is_empty() {
            output.push_str(&format!(
                "{}\n{}\n\n",
                "Why it fits:".cyan().bold(),
                Self::indent(&record.explanation, "  ")
            ));
        }

        if !record.fun_fact.is_empty() {
            output.push_str(&format!(
                "{}\n{}\n\n",
                "Fun fact:".cyan().bold(),
                Self::indent(&record.fun_fact, "  ")
            ));
        }

        if !record.nicknames.is_empty() {
            output.push_str(&format!(
                "{} {}\n\n",
                "Nicknames:".cyan().bold(),
                record.nicknames.join(", ")
            ));
        }

        output.push_str(&format!(
            "{}\n",
            "Don't like this name? Adjust the creativity level and try again!"
                .dimmed()
                .italic()
        ));

        output
    }

    /// Format the name only (for scripting)
    pub fn format_name_only(record: &NameRecord) -> String {
        record.name.clone()
    }

    /// Format as JSON
    pub fn format_json(record: &NameRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered History, oldest first, with favorites starred
    pub fn format_history(store: &SessionStore) -> String {
        if store.is_empty() {
            return format!("{}\n", "No names generated yet.".dimmed());
        }

        let mut output = format!("{}\n", Self::section_header("History"));
        for (index, record) in store.history().iter().enumerate() {
            let star = if store.is_favorite(record.id) {
                "*".yellow().bold().to_string()
            } else {
                " ".to_string()
            };
            output.push_str(&format!(
                "{} {:>3}. {} {}\n",
                star,
                index + 1,
                record.name.bold(),
                format!(
                    "({}, {}, {})",
                    record.source_request.subject(),
                    record.source_request.style(),
                    record.created_at.format("%H:%M:%S")
                )
                .dimmed()
            ));
        }
        output
    }

    /// Favorites in favoriting order
    pub fn format_favorites(store: &SessionStore) -> String {
        if store.favorite_count() == 0 {
            return format!(
                "{}\n",
                "No favorites yet. Use /fav <n> to star a name from /history.".dimmed()
            );
        }

        let mut output = format!("{}\n", Self::section_header("Favorites"));
        for record in store.favorites() {
            output.push_str(&format!(
                "  {} {} {}\n",
                "*".yellow().bold(),
                record.name.bold(),
                format!("- {}", record.source_request.subject()).dimmed()
            ));
            if !record.nicknames.is_empty() {
                output.push_str(&format!(
                    "      {}\n",
                    format!("aka {}", record.nicknames.join(", ")).dimmed()
                ));
            }
        }
        output
    }

    /// Tips for choosing a pet name
    pub fn format_tips() -> String {
        let mut output = format!("{}\n", Self::section_header("Tips for choosing a pet name"));
        for tip in NAMING_TIPS {
            output.push_str(&format!("  * {}\n", tip));
        }
        output
    }

    /// Preset pet types, colors and styles
    pub fn format_presets() -> String {
        let styles = NameStyle::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}\n  {} {}\n  {} {}\n  {} {}\n  {}\n",
            Self::section_header("Presets"),
            "Pets:".cyan(),
            PET_TYPES.join(", "),
            "Colors:".cyan(),
            PET_COLORS.join(", "),
            "Styles:".cyan(),
            styles,
            "Anything else works too - just type it.".dimmed()
        )
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
