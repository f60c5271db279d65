//! Interactive chat session.
//!
//! Blocking line-oriented loop: one input, one rendered answer per turn.
//! The session log and last-disaster context live for exactly as long as
//! this loop runs.

use crate::config::AshaConfig;
use anyhow::{Context, Result};
use asha_common::{Resolver, Role, SessionState};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

const HR: &str = "────────────────────────────────────────";

/// Section headers emitted by the resolver's answer formats.
const SECTION_HEADERS: &[&str] = &["What to do:", "Avoid:", "How:", "Why:"];

/// Run the chat loop until EOF or a quit word.
pub fn run(resolver: &Resolver, config: &AshaConfig, transcript: Option<&Path>) -> Result<()> {
    let mut session = SessionState::new();
    info!(session_id = %session.session_id, "chat session started");

    print_greeting();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", format!("{}>", config.prompt).bright_magenta().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "bye") {
            break;
        }

        session.push_turn(Role::User, input);
        let reply = resolver.handle_turn(input, &mut session)?;
        session.push_turn(Role::Assistant, reply.clone());
        print_reply(&reply, config.wrap_width);
    }

    if let Some(path) = transcript {
        write_transcript(&session, path)?;
        println!("Transcript written to {}", path.display());
    }
    println!("{}", "Stay safe out there.".dimmed());
    Ok(())
}

fn print_greeting() {
    println!();
    println!("{}", "Asha Safety Desk".bright_white().bold());
    println!("{}", HR);
    println!("Ask about earthquake, flood, or cyclone safety.");
    println!("You will get what to do, why, and how. Type 'quit' to leave.");
    println!();
}

fn print_reply(reply: &str, width: usize) {
    println!();
    for line in reply.lines() {
        if line.starts_with("NO — NOT SAFE.") {
            println!("{}", textwrap::fill(line, width).red());
        } else if line.starts_with("YES — SAFE.") {
            println!("{}", textwrap::fill(line, width).green());
        } else if SECTION_HEADERS.contains(&line) {
            println!("{}", line.bright_cyan());
        } else if line.starts_with("- ") {
            println!("{}", line);
        } else {
            println!("{}", textwrap::fill(line, width));
        }
    }
    println!();
}

fn write_transcript(session: &SessionState, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    std::fs::write(path, json)
        .with_context(|| format!("writing transcript to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asha_common::Disaster;

    #[test]
    fn test_transcript_roundtrip() {
        let resolver = Resolver::builtin();
        let mut session = SessionState::new();
        session.push_turn(Role::User, "what is a flood");
        let reply = resolver.handle_turn("what is a flood", &mut session).unwrap();
        session.push_turn(Role::Assistant, reply);

        let file = tempfile::NamedTempFile::new().unwrap();
        write_transcript(&session, file.path()).unwrap();

        let restored: SessionState =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(restored.session_id, session.session_id);
        assert_eq!(restored.turns(), session.turns());
        assert_eq!(restored.last_disaster(), Some(Disaster::Flood));
    }
}
