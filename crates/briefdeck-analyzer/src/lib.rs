//! Briefdeck Analysis Orchestrator
//!
//! The coordinating layer of Briefdeck: pulls recent examples from the
//! example store, builds a few-shot chat prompt, invokes the inference
//! client, persists the new (brief, reply) pair on success, and splits the
//! reply into its reasoning and task-breakdown segments.
//!
//! # Examples
//!
//! ```no_run
//! use briefdeck_analyzer::{Analyzer, AnalyzerConfig};
//! use briefdeck_llm::{LlmConfig, OllamaChat};
//! use briefdeck_store::SqliteStore;
//! use std::sync::{Arc, Mutex};
//!
//! # async fn run() {
//! let store = Arc::new(Mutex::new(SqliteStore::open("briefdeck.db").unwrap()));
//! let chat = OllamaChat::new(LlmConfig::default());
//! let analyzer = Analyzer::new(chat, store, AnalyzerConfig::default());
//!
//! let analysis = analyzer.analyze("Write a 2000-word report").await.unwrap();
//! println!("{}", analysis.breakdown);
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod prompt;
pub mod segment;

pub use analyzer::{Analysis, Analyzer, Health};
pub use config::AnalyzerConfig;
pub use error::AnalyzeError;
pub use prompt::PromptBuilder;
pub use segment::{Segments, DIRECT_BREAKDOWN_PLACEHOLDER, NO_REASONING_PLACEHOLDER};
