//! Asha Control - terminal client for the Asha assistant
//!
//! Thin presentation layer over `asha_common`: it reads user strings and
//! renders the guidance the resolver returns. All understanding lives in
//! the core crate.

pub mod chat;
pub mod cli;
pub mod commands;
pub mod config;

// Version is embedded at build time
pub const VERSION: &str = env!("ASHA_VERSION");
