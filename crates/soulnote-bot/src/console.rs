//! Local terminal transport built on rustyline.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use soulnote_application::JournalService;
use soulnote_core::entry::UserId;
use soulnote_core::menu::known_labels;
use soulnote_core::slash_command::builtin_commands;
use soulnote_core::{IncomingMessage, Keyboard, Reply};

/// Completes slash commands, the buttons of the last keyboard shown, then
/// every other label the router knows.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    buttons: Vec<String>,
    labels: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: builtin_commands()
                .iter()
                .map(|command| format!("/{}", command.name))
                .collect(),
            buttons: Vec::new(),
            labels: known_labels().map(str::to_string).collect(),
        }
    }

    fn set_keyboard(&mut self, keyboard: &Keyboard) {
        self.buttons = keyboard.labels().map(str::to_string).collect();
    }

    fn candidates(&self, prefix: &str) -> Vec<&String> {
        let lowered = prefix.to_lowercase();
        if prefix.starts_with('/') {
            return self
                .commands
                .iter()
                .filter(|command| command.starts_with(&lowered))
                .collect();
        }
        let others = self.labels.iter().filter(|label| !self.buttons.contains(*label));
        self.buttons
            .iter()
            .chain(others)
            .filter(|candidate| matches_prefix(candidate, &lowered))
            .collect()
    }
}

/// Buttons start with an emoji, so the words after it match as well.
fn matches_prefix(candidate: &str, lowered_prefix: &str) -> bool {
    let candidate = candidate.to_lowercase();
    candidate.starts_with(lowered_prefix)
        || candidate
            .split_once(' ')
            .is_some_and(|(_, words)| words.starts_with(lowered_prefix))
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
        let candidates = self
            .candidates(line)
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else if self.buttons.iter().any(|button| button == line) {
            Owned(line.bright_yellow().to_string())
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
        if line.is_empty() {
            return None;
        }
        // Hints only make sense when the typed text is a literal prefix.
        self.candidates(line)
            .into_iter()
            .find(|candidate| candidate.starts_with(line) && candidate.len() > line.len())
            .map(|candidate| candidate[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

/// Renders a reply the way a chat client would: text, then button rows.
fn render_reply(reply: &Reply) -> Vec<String> {
    let mut lines: Vec<String> = reply.text.lines().map(str::to_string).collect();
    if let Some(keyboard) = &reply.keyboard {
        lines.push(String::new());
        lines.extend(render_keyboard(keyboard));
    }
    lines
}

fn render_keyboard(keyboard: &Keyboard) -> Vec<String> {
    keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|label| format!("[{}]", label))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn print_reply(reply: &Reply) {
    let text_lines = reply.text.lines().count();
    for (index, line) in render_reply(reply).into_iter().enumerate() {
        if index < text_lines {
            println!("{}", line.bright_blue());
        } else {
            println!("{}", line.bright_black());
        }
    }
    println!();
}

/// Runs the console chat until `quit`, `exit` or Ctrl-D.
pub async fn run(service: Arc<JournalService>, user_id: UserId, name: String) -> Result<()> {
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== SoulNote console ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a button label or a /command (Tab completes), or 'quit' to exit.".bright_black()
    );
    println!();

    let greeting = service.handle(&IncomingMessage::new(user_id, name.clone(), "/start")).await;
    show(&mut rl, &greeting);

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);
                let reply = service
                    .handle(&IncomingMessage::new(user_id, name.clone(), trimmed))
                    .await;
                show(&mut rl, &reply);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!(error = %err, "Console input failed");
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

fn show(rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>, reply: &Reply) {
    print_reply(reply);
    if let (Some(keyboard), Some(helper)) = (&reply.keyboard, rl.helper_mut()) {
        helper.set_keyboard(keyboard);
    }
}
