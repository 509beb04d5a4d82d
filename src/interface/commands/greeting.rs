//! # Greeting Command
//!
//! Handles any message containing "hello".

use crate::strings::messages;

pub fn handle_greeting() -> String {
    messages::GREETING.to_string()
}
