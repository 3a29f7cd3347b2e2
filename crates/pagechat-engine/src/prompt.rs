// SPDX-FileCopyrightText: 2026 Pagechat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic prompt construction from page context and conversation.
//!
//! Rendering is a pure function: identical inputs produce byte-identical
//! output. No randomness, no timestamps, no I/O. Malformed input is a
//! caller contract violation, not a runtime error handled here.

use pagechat_core::{ConversationTurn, PageContext};

/// Marker appended to truncated page text so the model knows the content
/// is partial.
pub const TRUNCATION_MARKER: &str = "...content truncated...";

/// Builds prompts from page context, user query, and conversation history.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    max_page_text_chars: usize,
}

impl PromptBuilder {
    /// Creates a builder that truncates page text beyond `max_page_text_chars`
    /// characters.
    pub fn new(max_page_text_chars: usize) -> Self {
        Self {
            max_page_text_chars,
        }
    }

    /// Renders the full prompt.
    ///
    /// Page text is truncated first (producing a new [`PageContext`]; the
    /// original is never mutated). The history's final turn is excluded
    /// because it duplicates the current query.
    pub fn build(
        &self,
        context: &PageContext,
        query: &str,
        history: &[ConversationTurn],
    ) -> String {
        let context = self.truncate_page_text(context);
        render_prompt(&context, query, history)
    }

    /// Returns a copy of `context` with page text capped at the configured
    /// maximum, with [`TRUNCATION_MARKER`] appended when truncation occurred.
    pub fn truncate_page_text(&self, context: &PageContext) -> PageContext {
        if context.page_text.chars().count() <= self.max_page_text_chars {
            return context.clone();
        }

        let mut truncated: String = context
            .page_text
            .chars()
            .take(self.max_page_text_chars)
            .collect();
        truncated.push_str(TRUNCATION_MARKER);

        PageContext {
            url: context.url.clone(),
            title: context.title.clone(),
            meta_description: context.meta_description.clone(),
            meta_keywords: context.meta_keywords.clone(),
            page_text: truncated,
        }
    }
}

/// Renders the fixed prompt template.
fn render_prompt(context: &PageContext, query: &str, history: &[ConversationTurn]) -> String {
    let mut prompt = String::with_capacity(context.page_text.len() + 512);

    prompt.push_str(
        "You are a helpful assistant that answers questions about web pages. \
         Answer the user's question using only the webpage content provided below.\n\n",
    );

    prompt.push_str("WEBPAGE INFORMATION:\n");
    prompt.push_str(&format!("URL: {}\n", context.url));
    prompt.push_str(&format!("TITLE: {}\n", context.title));
    if let Some(description) = &context.meta_description {
        prompt.push_str(&format!("META DESCRIPTION: {description}\n"));
    }
    if let Some(keywords) = &context.meta_keywords {
        prompt.push_str(&format!("META KEYWORDS: {keywords}\n"));
    }

    prompt.push_str("\nPAGE CONTENT:\n");
    prompt.push_str(&context.page_text);
    prompt.push('\n');

    // The final turn duplicates the current query, so it is not rendered.
    if history.len() > 1 {
        prompt.push_str("\nPREVIOUS CONVERSATION:\n");
        for turn in &history[..history.len() - 1] {
            prompt.push_str(&format!("{}: {}\n", turn.role, turn.content));
        }
    }

    prompt.push_str("\nUSER QUESTION:\n");
    prompt.push_str(query);
    prompt.push('\n');

    prompt.push_str(
        "\nAnswer based solely on the information provided in the webpage content above. \
         If the answer cannot be determined from the provided content, state that clearly.\n",
    );

    prompt
}
