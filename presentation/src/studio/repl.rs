//! REPL (Read-Eval-Print Loop) for the interactive studio

use super::command::{ReplCommand, parse_command};
use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use petname_application::{
    GenerateError, GenerationForm, GenerationGateway, NoProgress, PetNameStudio, StudioAction,
    StudioOutcome,
};
use petname_domain::{Creativity, NameStyle, OutputFormat};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}

/// Interactive studio REPL
///
/// Every input line becomes at most one [`StudioAction`]; the screen is
/// redrawn from the returned outcome and the studio's store.
pub struct StudioRepl<G: GenerationGateway + 'static> {
    studio: PetNameStudio<G>,
    style: NameStyle,
    creativity: Creativity,
    traits: Vec<String>,
    last_form: Option<GenerationForm>,
    format: OutputFormat,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl<G: GenerationGateway + 'static> StudioRepl<G> {
    /// Create a new StudioRepl
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            studio: PetNameStudio::new(gateway),
            style: NameStyle::default(),
            creativity: Creativity::default(),
            traits: Vec::new(),
            last_form: None,
            format: OutputFormat::Full,
            show_progress: true,
            history_path: None,
        }
    }

    /// Set the starting style
    pub fn with_style(mut self, style: NameStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the starting creativity
    pub fn with_creativity(mut self, creativity: Creativity) -> Self {
        self.creativity = creativity;
        self
    }

    /// Set how generated names are printed
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether to show the spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set where readline history is kept
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn studio(&self) -> &PetNameStudio<G> {
        &self.studio
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("pets> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if self.execute_line(line).await == CommandResult::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Parse and execute one input line
    pub async fn execute_line(&mut self, line: &str) -> CommandResult {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.yellow());
                return CommandResult::Continue;
            }
        };
        debug!(?command, "Studio command");

        match command {
            ReplCommand::Generate {
                pet_type,
                color,
                traits,
            } => {
                let traits = if traits.is_empty() {
                    self.traits.clone()
                } else {
                    traits
                };
                let form = GenerationForm::new(pet_type, color)
                    .with_traits(traits)
                    .with_style(self.style)
                    .with_creativity(self.creativity.value());
                self.last_form = Some(form.clone());
                self.dispatch(StudioAction::Generate(form)).await;
            }
            ReplCommand::Again => match self.last_form.clone() {
                Some(form) => {
                    let form = form
                        .with_style(self.style)
                        .with_creativity(self.creativity.value());
                    self.dispatch(StudioAction::Generate(form)).await;
                }
                None => println!("{}", "Nothing to repeat yet. Try: dog, brown".yellow()),
            },
            ReplCommand::Style(style) => {
                self.style = style;
                println!("Style set to {}", style.as_str().bold());
            }
            ReplCommand::Creativity(value) => match Creativity::new(value) {
                Ok(creativity) => {
                    self.creativity = creativity;
                    println!("Creativity set to {}", creativity.to_string().bold());
                }
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            ReplCommand::Traits(traits) => {
                if traits.is_empty() {
                    println!("Default traits cleared");
                } else {
                    println!("Default traits: {}", traits.join(", ").bold());
                }
                self.traits = traits;
            }
            ReplCommand::Favorite(position) => match self.studio.store().id_at(position) {
                Some(id) => self.dispatch(StudioAction::ToggleFavorite(id)).await,
                None => println!(
                    "{}",
                    format!("No entry #{} in history", position).yellow()
                ),
            },
            ReplCommand::History => {
                print!("{}", ConsoleFormatter::format_history(self.studio.store()))
            }
            ReplCommand::Favorites => {
                print!("{}", ConsoleFormatter::format_favorites(self.studio.store()))
            }
            ReplCommand::Clear => self.dispatch(StudioAction::ClearHistory).await,
            ReplCommand::Tips => print!("{}", ConsoleFormatter::format_tips()),
            ReplCommand::Pets => print!("{}", ConsoleFormatter::format_presets()),
            ReplCommand::Settings => self.print_settings(),
            ReplCommand::Help => self.print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return CommandResult::Exit;
            }
        }

        CommandResult::Continue
    }

    async fn dispatch(&mut self, action: StudioAction) {
        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.studio.handle_with_progress(action, &progress).await
        } else {
            self.studio.handle_with_progress(action, &NoProgress).await
        };

        match result {
            Ok(StudioOutcome::Generated(record)) => {
                println!();
                println!("{}", ConsoleFormatter::format_as(&record, self.format));
                println!(
                    "{}",
                    format!(
                        "Saved as #{} in history. /fav {} to keep it.",
                        self.studio.store().len(),
                        self.studio.store().len()
                    )
                    .dimmed()
                );
            }
            Ok(StudioOutcome::FavoriteToggled { id, favorited }) => {
                let name = self
                    .studio
                    .store()
                    .get(id)
                    .map(|r| r.name.clone())
                    .unwrap_or_default();
                match favorited {
                    Some(true) => println!("{} {} added to favorites", "*".yellow(), name.bold()),
                    Some(false) => println!("{} removed from favorites", name.bold()),
                    None => println!("{}", "That name is no longer in history".yellow()),
                }
            }
            Ok(StudioOutcome::Cleared) => println!("History and favorites cleared"),
            Err(e) => Self::print_error(&e),
        }
    }

    fn print_error(error: &GenerateError) {
        match error {
            GenerateError::Validation(_) => {
                eprintln!("{} {}", "Warning:".yellow().bold(), error)
            }
            _ => eprintln!("{} {}", "Error:".red().bold(), error),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "╭─────────────────────────────────────────────╮".cyan());
        println!("{}", "│        Pet Name Studio - Interactive        │".cyan());
        println!("{}", "╰─────────────────────────────────────────────╯".cyan());
        println!();
        println!("{} {}", "Provider:".bold(), self.studio.gateway().describe());
        println!();
        println!("Type a pet and a color to get a name, e.g. {}", "dog, brown, playful".bold());
        println!("Type {} for all commands.", "/help".bold());
        println!();
    }

    fn print_settings(&self) {
        println!();
        println!("{} {}", "Style:".bold(), self.style);
        println!("{} {}", "Creativity:".bold(), self.creativity);
        println!(
            "{} {}",
            "Default traits:".bold(),
            if self.traits.is_empty() {
                "(none)".to_string()
            } else {
                self.traits.join(", ")
            }
        );
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  <pet>, <color>[, traits]   - Generate a name (same as /generate)");
        println!("  /generate, /g              - Generate a name");
        println!("  /again, /a                 - Try again with the last pet");
        println!("  /style <style>             - Set naming style");
        println!("  /creativity <0.0-1.0>      - Set creativity level");
        println!("  /traits a, b               - Set default personality traits");
        println!("  /fav <n>                   - Toggle favorite for history entry n");
        println!("  /history                   - Show generated names");
        println!("  /favorites                 - Show favorites");
        println!("  /clear                     - Clear history and favorites");
        println!("  /pets                      - Show preset pets, colors and styles");
        println!("  /tips                      - Tips for choosing a pet name");
        println!("  /settings                  - Show current settings");
        println!("  /quit, /exit, /q           - Exit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use petname_application::GatewayError;
    use std::sync::Mutex;

    /// Gateway that answers with a fixed text and records temperatures
    struct StubGateway {
        temperatures: Mutex<Vec<f32>>,
    }

    #[async_trait]
    impl GenerationGateway for StubGateway {
        async fn generate(
            &self,
            _prompt: &str,
            creativity: Creativity,
        ) -> Result<String, GatewayError> {
            self.temperatures.lock().unwrap().push(creativity.value());
            Ok("Name: Biscuit\nExplanation: warm\nFun Fact: loves fetch\nNicknames: Bix".to_string())
        }
    }

    fn repl() -> StudioRepl<StubGateway> {
        StudioRepl::new(Arc::new(StubGateway {
            temperatures: Mutex::new(Vec::new()),
        }))
        .with_progress(false)
    }

    #[tokio::test]
    async fn test_generate_then_favorite_then_clear() {
        let mut repl = repl();

        repl.execute_line("dog, brown, playful").await;
        assert_eq!(repl.studio().store().len(), 1);
        let id = repl.studio().store().id_at(1).unwrap();

        repl.execute_line("/fav 1").await;
        assert!(repl.studio().store().is_favorite(id));

        repl.execute_line("/fav 1").await;
        assert!(!repl.studio().store().is_favorite(id));

        repl.execute_line("/clear").await;
        assert!(repl.studio().store().is_empty());
    }

    #[tokio::test]
    async fn test_again_uses_current_creativity() {
        let mut repl = repl();

        repl.execute_line("/again").await;
        assert!(repl.studio().store().is_empty());

        repl.execute_line("cat, black").await;
        repl.execute_line("/creativity 0.2").await;
        repl.execute_line("/again").await;

        assert_eq!(repl.studio().store().len(), 2);
        let temps = repl.studio().gateway().temperatures.lock().unwrap().clone();
        assert_eq!(temps, vec![0.7, 0.2]);
    }

    #[tokio::test]
    async fn test_out_of_range_creativity_is_ignored() {
        let mut repl = repl();
        repl.execute_line("/creativity 4").await;
        repl.execute_line("cat, black").await;

        let temps = repl.studio().gateway().temperatures.lock().unwrap().clone();
        assert_eq!(temps, vec![0.7]);
    }

    #[tokio::test]
    async fn test_default_traits_apply() {
        let mut repl = repl();
        repl.execute_line("/traits sleepy").await;
        repl.execute_line("cat, black").await;

        let record = repl.studio().store().latest().unwrap();
        assert!(record.source_request.personality_traits().contains("sleepy"));
    }

    #[tokio::test]
    async fn test_favorite_out_of_range_is_noop() {
        let mut repl = repl();
        repl.execute_line("/fav 3").await;
        assert_eq!(repl.studio().store().favorite_count(), 0);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut repl = repl();
        assert_eq!(repl.execute_line("/quit").await, CommandResult::Exit);
        assert_eq!(repl.execute_line("/help").await, CommandResult::Continue);
    }
}
