//! Asha Common - core types and resolution logic for the Asha assistant
//!
//! Everything the presentation layer needs: the disaster taxonomy, the
//! static knowledge store, the keyword-based intent classifier, the session
//! state, and the response resolver. Resolution is pure and synchronous;
//! the only I/O in this crate is the optional loading of an external
//! knowledge pack before a session starts.

pub mod classifier;
pub mod disaster;
pub mod error;
pub mod knowledge;
pub mod resolver;
pub mod session;

pub use classifier::*;
pub use disaster::*;
pub use error::*;
pub use knowledge::*;
pub use resolver::*;
pub use session::*;
