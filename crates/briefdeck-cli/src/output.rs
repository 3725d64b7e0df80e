//! Terminal output formatting.

use briefdeck_analyzer::Analysis;
use briefdeck_domain::Example;
use colored::Colorize;
use tabled::{Table, Tabled};

/// Formats analysis results and example listings for the terminal.
pub struct Formatter;

#[derive(Tabled)]
struct ExampleRow {
    #[tabled(rename = "Created (unix)")]
    created_at: i64,
    #[tabled(rename = "Brief")]
    brief: String,
    #[tabled(rename = "Breakdown")]
    breakdown: String,
}

impl Formatter {
    /// Create a formatter; when `color` is false all styling is disabled.
    pub fn new(color: bool) -> Self {
        if !color {
            colored::control::set_override(false);
        }
        Self
    }

    /// Print the two sections of an analysis, or the raw reply.
    pub fn print_analysis(&self, analysis: &Analysis, raw: bool) {
        if raw {
            println!("{}", analysis.raw);
        } else {
            println!("{}", "Reasoning".bold().cyan());
            println!("{}\n", analysis.reasoning);
            println!("{}", "Task Breakdown".bold().green());
            println!("{}", analysis.breakdown);
        }

        if !analysis.saved {
            eprintln!(
                "{}",
                "Note: the analysis succeeded but could not be saved for future context."
                    .yellow()
            );
        }
    }

    /// Print stored examples as a table, newest first.
    pub fn print_recent(&self, examples: &[Example]) {
        if examples.is_empty() {
            println!("No analyses stored yet.");
            return;
        }

        let rows: Vec<ExampleRow> = examples
            .iter()
            .map(|e| ExampleRow {
                created_at: e.created_at,
                brief: truncate(&e.brief_text, 48),
                breakdown: truncate(&e.breakdown_text, 64),
            })
            .collect();

        println!("{}", Table::new(rows));
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".bold().red(), message);
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}…", cut.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_flattens_newlines() {
        assert_eq!(truncate("a\nb", 10), "a b");
    }

    #[test]
    fn test_truncate_caps_length() {
        let long = "word ".repeat(40);
        let cut = truncate(&long, 20);
        assert!(cut.chars().count() <= 21);
        assert!(cut.ends_with('…'));
    }
}
