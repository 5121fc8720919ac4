use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use super::UsageRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(default)]
    pub bot_response_status: Option<String>,
    #[serde(default)]
    pub token_usage: UsageRecord,
}

impl Conversation {
    /// A bot response is still being generated for this conversation.
    pub fn is_loading(&self) -> bool {
        self.bot_response_status
            .as_deref()
            .is_some_and(|status| !status.is_empty())
    }
}

/// Conversation state as exported by the chat client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStore {
    pub selected_id: String,
    #[serde(default)]
    pub conversations: IndexMap<String, Conversation>,
}

impl SessionStore {
    pub fn from_json(json: &str) -> Result<Self> {
        let store: Self =
            serde_json::from_str(json).context("Failed to parse conversation state")?;
        for (id, conversation) in &store.conversations {
            conversation
                .token_usage
                .validate()
                .with_context(|| format!("Invalid token usage for conversation '{}'", id))?;
        }
        Ok(store)
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected_id = id.into();
    }

    pub fn active(&self) -> Result<&Conversation> {
        self.conversations
            .get(&self.selected_id)
            .ok_or_else(|| anyhow!("Unknown conversation id '{}'", self.selected_id))
    }
}
