//! # Command Line
//!
//! Argument parsing and turning the command line (or one stdin line) into a message.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use crate::strings::{help, messages};

const EXECUTIVES_COMMAND: &str = "executives";

/// Answers greetings and looks up a coin's socials and team on CoinGecko
#[derive(Parser, Debug)]
#[command(name = "near-coin-agent")]
#[command(version, about, long_about = None, after_help = help::MAIN)]
pub struct Args {
    /// Message words; bare words are treated as a coin id
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "MESSAGE")]
    pub words: Vec<String>,
}

impl Args {
    /// The message to route, or `None` when it has to be read interactively.
    pub fn message(&self) -> Option<String> {
        compose_message(&self.words)
    }
}

/// Bare arguments name a coin, so anything not starting with `executives` gets it prepended.
pub fn compose_message(words: &[String]) -> Option<String> {
    let first = words.first()?;
    let joined = words.join(" ");
    if first.to_lowercase() == EXECUTIVES_COMMAND {
        Some(joined)
    } else {
        Some(format!("{EXECUTIVES_COMMAND} {joined}"))
    }
}

/// Prompt on stdout and read a single line. EOF yields an empty message.
pub fn prompt_line(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{}", messages::INPUT_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read message from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn read_message_interactively() -> Result<String> {
    prompt_line(&mut io::stdin().lock(), &mut io::stdout())
}
