//! # Interface Layer
//!
//! Command handlers and the command-line entry surface.

pub mod cli;
pub mod commands;
