//! Advertising idea generation
//!
//! Turns a [`ProductBrief`] into a prompt, runs a single completion and
//! parses the returned block of text into an ordered list of ideas.

use crate::ai::ChatService;
use crate::models::ProductBrief;
use crate::{prompts, Result};
use std::sync::Arc;
use tracing::info;

pub struct IdeaGenerator {
    chat: Arc<dyn ChatService>,
}

impl IdeaGenerator {
    pub fn new(chat: Arc<dyn ChatService>) -> Self {
        Self { chat }
    }

    /// Generate up to `count` ideas for `brief`.
    ///
    /// Fails before any outbound call when the chat provider is not
    /// configured. Provider failures are returned as-is; there is no retry
    /// and never a partial list.
    pub async fn generate(&self, brief: &ProductBrief, count: usize) -> Result<Vec<String>> {
        self.chat.ensure_configured()?;

        info!(
            "Generating {} ideas for product '{}'",
            count, brief.product_name
        );

        let prompt = prompts::idea_prompt(brief, count);
        let text = self.chat.complete(prompts::IDEA_SYSTEM, &prompt).await?;

        let ideas = parse_ideas(&text, count);
        info!("Generated {} ideas", ideas.len());

        Ok(ideas)
    }
}

fn is_list_marker(c: char) -> bool {
    matches!(c, '.' | '-' | '•') || c.is_ascii_digit() || c.is_whitespace()
}

/// Strip surrounding whitespace and any leading numbering or bullet run.
///
/// Any whitespace (not only spaces) counts as part of the leading run, which
/// keeps the function idempotent for lines like `"- \t- idea"`.
pub fn normalize_idea_line(line: &str) -> &str {
    line.trim_start_matches(is_list_marker).trim_end()
}

/// Split completion text into at most `count` non-empty ideas, in order.
pub fn parse_ideas(text: &str, count: usize) -> Vec<String> {
    text.lines()
        .map(normalize_idea_line)
        .filter(|idea| !idea.is_empty())
        .take(count)
        .map(str::to_string)
        .collect()
}
