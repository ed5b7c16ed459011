//! Parsing of studio input lines into commands

use petname_domain::NameStyle;

/// A parsed studio input line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// `/generate <pet>, <color>[, trait...]` or a bare line in the same form
    Generate {
        pet_type: String,
        color: String,
        traits: Vec<String>,
    },
    /// Re-run the last generation with the current settings
    Again,
    Style(NameStyle),
    Creativity(f32),
    /// Default traits for generations that don't list their own
    Traits(Vec<String>),
    /// Toggle favorite for a 1-based History position
    Favorite(usize),
    History,
    Favorites,
    Clear,
    Tips,
    Pets,
    Settings,
    Help,
    Quit,
}

/// Parse one input line.
///
/// Lines not starting with `/` are treated as `/generate` arguments.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return parse_generate(line);
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };

    match name {
        "generate" | "gen" | "g" => parse_generate(args),
        "again" | "a" => Ok(ReplCommand::Again),
        "style" => args
            .parse::<NameStyle>()
            .map(ReplCommand::Style)
            .map_err(|e| e.to_string()),
        "creativity" | "temp" => args
            .parse::<f32>()
            .map(ReplCommand::Creativity)
            .map_err(|_| format!("'{}' is not a number between 0.0 and 1.0", args)),
        "traits" => Ok(ReplCommand::Traits(split_list(args))),
        "fav" | "favorite" | "f" => args
            .parse::<usize>()
            .map(ReplCommand::Favorite)
            .map_err(|_| "Usage: /fav <n>  (n is the number shown in /history)".to_string()),
        "history" => Ok(ReplCommand::History),
        "favorites" | "favs" => Ok(ReplCommand::Favorites),
        "clear" => Ok(ReplCommand::Clear),
        "tips" => Ok(ReplCommand::Tips),
        "pets" | "presets" => Ok(ReplCommand::Pets),
        "settings" => Ok(ReplCommand::Settings),
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        other => Err(format!(
            "Unknown command: /{}\nType /help for available commands",
            other
        )),
    }
}

fn parse_generate(args: &str) -> Result<ReplCommand, String> {
    let mut parts = split_list(args).into_iter();
    match (parts.next(), parts.next()) {
        (Some(pet_type), Some(color)) => Ok(ReplCommand::Generate {
            pet_type,
            color,
            traits: parts.collect(),
        }),
        _ => Err("Usage: /generate <pet>, <color>[, trait, ...]  e.g. dog, brown, playful".to_string()),
    }
}

fn split_list(args: &str) -> Vec<String> {
    args.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
