//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the message into an `Intent` and dispatches it with the necessary context.
//! Routing is total: every message gets a printable answer.

use std::sync::Arc;

use crate::domain::traits::CoinMetadataProvider;
use crate::domain::types::Intent;
use crate::interface::commands;
use crate::strings::{logs, messages};

pub struct CommandRouter {
    coins: Arc<dyn CoinMetadataProvider>,
}

impl CommandRouter {
    pub fn new(coins: Arc<dyn CoinMetadataProvider>) -> Self {
        Self { coins }
    }

    pub async fn route(&self, message: &str) -> String {
        let intent = Intent::parse(message);
        tracing::info!("{}", logs::dispatching(intent.as_str()));

        match intent {
            Intent::Greeting => commands::greeting::handle_greeting(),
            Intent::Executives { coin } => {
                commands::executives::handle_executives(self.coins.as_ref(), &coin).await
            }
            Intent::ExecutivesUsage => messages::EXECUTIVES_USAGE.to_string(),
            Intent::Unknown => messages::UNKNOWN_COMMAND.to_string(),
        }
    }
}
