//! One-shot subcommands.

use anyhow::{ensure, Context, Result};
use asha_common::{Disaster, DisasterKnowledge, Phase, Resolver, Role, SessionState};
use owo_colors::OwoColorize;

/// `ashactl ask` - resolve a single question against a fresh session.
pub fn ask(resolver: &Resolver, question: &str) -> Result<()> {
    ensure!(!question.trim().is_empty(), "empty question");

    let mut session = SessionState::new();
    session.push_turn(Role::User, question);
    let reply = resolver.handle_turn(question, &mut session)?;
    session.push_turn(Role::Assistant, reply.clone());

    println!("{}", reply);
    Ok(())
}

/// `ashactl knowledge` - print a pack summary, or one disaster's table.
pub fn knowledge(resolver: &Resolver, disaster: Option<&str>) -> Result<()> {
    match disaster {
        Some(name) => {
            let disaster = Disaster::from_name(name)
                .with_context(|| format!("unknown disaster '{}'", name))?;
            print_disaster(disaster, resolver.knowledge().lookup(disaster)?);
        }
        None => {
            println!("{}", "Knowledge pack".bold());
            for (disaster, knowledge) in resolver.knowledge().iter() {
                println!(
                    "  {:<12} {} safe places, {} unsafe places",
                    disaster.title(),
                    knowledge.safe_places.len(),
                    knowledge.unsafe_places.len()
                );
            }
        }
    }
    Ok(())
}

fn print_disaster(disaster: Disaster, knowledge: &DisasterKnowledge) {
    println!("{}", disaster.title().bold());
    println!("{}", knowledge.definition);

    for phase in Phase::ALL {
        let guidance = knowledge.phases.get(phase);
        println!();
        println!("{}", format!("{}:", phase).bright_cyan());
        for action in &guidance.recommended {
            println!("  + {}", action);
        }
        for action in &guidance.avoid {
            println!("  - {}", action);
        }
    }

    println!();
    for (place, entry) in &knowledge.safe_places {
        println!("  {}  {:<14} {}", "safe".green(), place, entry.reason);
    }
    for (place, entry) in &knowledge.unsafe_places {
        println!("  {}  {:<12} {}", "unsafe".red(), place, entry.reason);
    }
}
