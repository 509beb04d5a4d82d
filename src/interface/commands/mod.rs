//! # Command Handlers
//!
//! Contains specific handler functions for each supported intent.
//! These handlers are invoked by the Router and always produce an answer.

pub mod executives;
pub mod greeting;
