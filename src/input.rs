use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;
use unidecode::unidecode;

use crate::game::quiz::definition::Verdict;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref FORBIDDEN_COMMAND_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Answer(Verdict),
    Next,
    Restart,
    Help,
    Quit,
}

fn sanitize(input: &str) -> String {
    let input = unidecode(input);
    FORBIDDEN_COMMAND_CHARACTERS_REGEX
        .replace_all(&input.to_lowercase(), "")
        .into()
}

/// Reads one line typed by the player. A blank line moves on to the next question.
pub fn parse_command(line: &str) -> Result<Command> {
    let command = match sanitize(line).as_str() {
        "ai" | "a" | "1" | "y" | "yes" => Command::Answer(Verdict::Ai),
        "notai" | "not" | "human" | "0" | "n" | "no" => Command::Answer(Verdict::NotAi),
        "" | "next" | "continue" => Command::Next,
        "start" | "restart" | "again" | "playagain" => Command::Restart,
        "help" | "h" | "rules" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(anyhow!("Unrecognized command {:?}, type `help` for the rules", line.trim())),
    };
    Ok(command)
}
