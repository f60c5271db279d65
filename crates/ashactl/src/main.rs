//! Asha Control - terminal client for the Asha assistant
//!
//! Wires the CLI surface to the core resolver and dispatches the chosen
//! subcommand.

use anyhow::{Context, Result};
use asha_common::{KnowledgeBase, Resolver};
use ashactl::cli::{Cli, Commands};
use ashactl::config::AshaConfig;
use ashactl::{chat, commands};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

fn main() -> Result<()> {
    // Logs go to stderr so the chat stream stays clean; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = AshaConfig::load();
    debug!(version = ashactl::VERSION, "ashactl starting");

    let pack = cli.pack.clone().or_else(|| config.knowledge_pack.clone());
    let resolver = build_resolver(pack)?;

    match cli.command {
        None => chat::run(&resolver, &config, None),
        Some(Commands::Chat { transcript }) => {
            chat::run(&resolver, &config, transcript.as_deref())
        }
        Some(Commands::Ask { question }) => commands::ask(&resolver, &question.join(" ")),
        Some(Commands::Knowledge { disaster }) => {
            commands::knowledge(&resolver, disaster.as_deref())
        }
    }
}

fn build_resolver(pack: Option<PathBuf>) -> Result<Resolver> {
    let knowledge = match pack {
        Some(path) => KnowledgeBase::from_path(&path)
            .with_context(|| format!("loading knowledge pack {}", path.display()))?,
        None => KnowledgeBase::builtin(),
    };
    Ok(Resolver::new(knowledge)?)
}
