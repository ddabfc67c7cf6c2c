use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::{EnvFilter, fmt};

use ladle_api::ApiClient;
use ladle_app::{IntentDispatcher, Page, UserIntent};
use ladle_core::config::ClientConfig;
use ladle_core::session::SessionStore;
use ladle_infrastructure::{ConfigService, FileSessionStore, LadlePaths};

mod frontend;

use frontend::TerminalFrontend;

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: [
                "login",
                "register",
                "logout",
                "ingredients",
                "ingredient add",
                "ingredient rm",
                "recipes",
                "recipe add",
                "recipe update",
                "recipe rm",
                "search",
                "help",
                "quit",
            ]
            .iter()
            .map(|command| command.to_string())
            .collect(),
        }
    }

    fn matches_command(&self, line: &str) -> bool {
        self.commands
            .iter()
            .any(|command| line.starts_with(command.as_str()))
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|command| command.starts_with(line) && !line.is_empty())
            .map(|command| Pair {
                display: command.clone(),
                replacement: command.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.matches_command(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|command| command.starts_with(line) && command.len() > line.len())
                .map(|command| command[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[derive(Parser)]
#[command(name = "ladle")]
#[command(about = "Ladle - terminal client for the recipe management backend", long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file and LADLE_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Directory for config and session files (defaults to ~/.ladle)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn print_help() {
    println!("{}", "Commands:".bright_magenta());
    println!("  login <username> <password>");
    println!("  register <username> <password> <repeat-password>");
    println!("  logout");
    println!("  ingredients");
    println!("  ingredient add <name>");
    println!("  ingredient rm <name>");
    println!("  recipes");
    println!("  recipe add <name> :: <instructions>");
    println!("  recipe update <name> :: <instructions>");
    println!("  recipe rm <name>");
    println!("  search [term]");
    println!("  quit");
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .init();

    let cli = Cli::parse();

    // ===== Backend wiring =====
    let paths = LadlePaths::new(cli.data_dir.as_deref())?;
    let config = match cli.base_url {
        Some(base_url) => ClientConfig::new(base_url),
        None => ConfigService::new(paths.clone()).load()?,
    };

    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::from_paths(&paths)?);
    let start_page = if session.token().is_some() {
        Page::Recipes
    } else {
        Page::Login
    };

    let frontend = Arc::new(TerminalFrontend::new(start_page));
    let api = Arc::new(ApiClient::new(&config, session.clone()));
    let mut dispatcher = IntentDispatcher::new(api, session.clone(), frontend.clone());

    // ===== REPL setup =====
    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Ladle ===".bright_magenta().bold());
    println!(
        "{}",
        format!("Connected to {}", config.base_url).bright_black()
    );
    if session.token().is_some() {
        let suffix = if session.is_admin() { " (admin)" } else { "" };
        println!("{}", format!("Existing session found{suffix}").bright_black());
    }
    println!(
        "{}",
        "Type 'help' for commands, 'quit' to exit.".bright_black()
    );
    println!();

    // ===== Main REPL loop =====
    loop {
        let prompt = format!("{} >> ", frontend.current_page().title().to_lowercase());
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match trimmed {
                    "quit" | "exit" => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    "help" => print_help(),
                    _ => match UserIntent::parse(trimmed) {
                        // Workflows run to completion one at a time; the
                        // prompt returns when the round trip is done.
                        Ok(intent) => dispatcher.dispatch(intent).await,
                        Err(message) => println!("{}", message.red()),
                    },
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
