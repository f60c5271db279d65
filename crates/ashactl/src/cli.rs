//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ashactl")]
#[command(about = "Asha - disaster awareness assistant", long_about = None)]
#[command(version = crate::VERSION)]
pub struct Cli {
    /// Use an external knowledge pack (JSON) instead of the built-in one
    #[arg(long, value_name = "FILE", global = true)]
    pub pack: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive chat session (the default when no subcommand is given)
    Chat {
        /// Write the conversation log to FILE as JSON on exit
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// The question, as free text
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Show what the assistant knows
    Knowledge {
        /// Limit output to one disaster
        #[arg(long)]
        disaster: Option<String>,
    },
}
