//! # Application Layer
//!
//! Contains the core logic of the agent: intent parsing, routing,
//! record extraction, output formatting and logging setup.

pub mod extract;
pub mod formatter;
pub mod intent;
pub mod logging;
pub mod router;
pub mod utils;
