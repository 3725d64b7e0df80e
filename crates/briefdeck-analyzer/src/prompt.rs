//! Chat prompt construction for brief analysis
//!
//! Few-shot priming with real prior outputs lets a small local model learn
//! the house format without fine-tuning.

use crate::segment;
use briefdeck_domain::{ChatMessage, Example};

/// Builds the ordered turn sequence sent to the model
pub struct PromptBuilder {
    brief: String,
    examples: Vec<Example>,
}

impl PromptBuilder {
    /// Create a prompt builder for a new brief
    pub fn new(brief: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            examples: Vec::new(),
        }
    }

    /// Add stored examples to replay as few-shot context.
    ///
    /// Examples are replayed in the order supplied; the builder does not
    /// re-sort them.
    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = examples;
        self
    }

    /// Build the complete turn sequence.
    ///
    /// One system directive, then per example a synthetic user/assistant
    /// exchange, then the new brief as the final user turn. Each example's
    /// own reasoning is discarded: only its breakdown segment is replayed,
    /// reformatted under the `### Task Breakdown` heading. This keeps
    /// prompts short without weakening the format signal.
    pub fn build(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(2 + self.examples.len() * 2);

        messages.push(ChatMessage::system(SYSTEM_DIRECTIVE));

        for example in &self.examples {
            let breakdown = segment::segment(&example.breakdown_text).breakdown;
            messages.push(ChatMessage::user(format!(
                "Assignment Brief:\n{}",
                example.brief_text
            )));
            messages.push(ChatMessage::assistant(format!(
                "### Task Breakdown\n{}",
                breakdown
            )));
        }

        messages.push(ChatMessage::user(format!(
            "Please analyze this new assignment brief:\n{}",
            self.brief
        )));

        messages
    }
}

const SYSTEM_DIRECTIVE: &str = "You are an expert academic assistant. Your job is to deconstruct a university assignment brief and surface every explicit and implicit task. Your response MUST have exactly two sections, in this order, with these headings.\n\n1. Start with the heading '### Reasoning'. Explain your interpretation of the brief: name the key academic keywords you detected (such as 'analyze', 'compare', 'contrast', 'deliverable', 'submit', 'report', 'presentation') and state what you believe the core requirements are.\n\n2. Then the heading '### Task Breakdown'. Based on your reasoning, give a clear, numbered list of every concrete task the student needs to complete. Assume there are always tasks to be found; never state that no tasks were specified.";

#[cfg(test)]
mod tests {
    use super::*;
    use briefdeck_domain::Role;

    #[test]
    fn test_prompt_without_examples() {
        let messages = PromptBuilder::new("Write a 2000-word essay").build();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains("### Reasoning"));
        assert!(messages[0].content.contains("### Task Breakdown"));
        assert!(messages[0].content.contains("never state that no tasks"));
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("Write a 2000-word essay"));
    }

    #[test]
    fn test_examples_become_synthetic_exchanges() {
        let examples = vec![
            Example::new("old brief one", "1. first task", 1),
            Example::new("old brief two", "1. other task", 2),
        ];

        let messages = PromptBuilder::new("new brief")
            .with_examples(examples)
            .build();

        assert_eq!(messages.len(), 6);
        assert_eq!(messages[1].role, Role::User);
        assert!(messages[1].content.contains("old brief one"));
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, "### Task Breakdown\n1. first task");
        assert_eq!(messages[3].role, Role::User);
        assert!(messages[3].content.contains("old brief two"));
        assert_eq!(messages[5].role, Role::User);
        assert!(messages[5].content.contains("new brief"));
    }

    #[test]
    fn test_example_reasoning_is_discarded() {
        // Stored breakdown text is the model's full raw reply; only the
        // breakdown segment is replayed.
        let stored = "### Reasoning\nthe brief says compare\n### Task Breakdown\n1. compare";
        let examples = vec![Example::new("old brief", stored, 1)];

        let messages = PromptBuilder::new("new brief")
            .with_examples(examples)
            .build();

        assert_eq!(messages[2].content, "### Task Breakdown\n1. compare");
        assert!(!messages[2].content.contains("the brief says compare"));
    }

    #[test]
    fn test_examples_keep_supplied_order() {
        let examples = vec![
            Example::new("newest", "1. n", 3),
            Example::new("older", "1. o", 2),
        ];

        let messages = PromptBuilder::new("x").with_examples(examples).build();
        assert!(messages[1].content.contains("newest"));
        assert!(messages[3].content.contains("older"));
    }
}
