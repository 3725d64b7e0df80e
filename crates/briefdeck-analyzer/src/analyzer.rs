//! The analysis orchestrator

use crate::config::AnalyzerConfig;
use crate::error::AnalyzeError;
use crate::prompt::PromptBuilder;
use crate::segment::segment;
use briefdeck_domain::traits::{ChatProvider, ExampleStore};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// The outcome of one successful analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The model's raw reply, verbatim (trimmed)
    pub raw: String,
    /// The reasoning segment (or a placeholder)
    pub reasoning: String,
    /// The task breakdown segment
    pub breakdown: String,
    /// Whether the (brief, reply) pair was persisted for future few-shot use
    pub saved: bool,
}

/// Coordinates example retrieval, inference, and persistence.
///
/// Exactly one store write happens per successful analysis; no write happens
/// on any inference failure. A failed write does not discard the analysis:
/// the result comes back with `saved = false`.
pub struct Analyzer<C, S>
where
    C: ChatProvider,
    S: ExampleStore,
{
    provider: Arc<C>,
    store: Arc<Mutex<S>>,
    config: AnalyzerConfig,
}

/// Service health as seen by the orchestrator.
#[derive(Debug, Clone)]
pub struct Health {
    /// Whether the inference endpoint answered the reachability probe
    pub llm_available: bool,
    /// Number of stored examples
    pub example_count: u64,
}

impl<C, S> Analyzer<C, S>
where
    C: ChatProvider + Send + Sync + 'static,
    S: ExampleStore,
    S::Error: std::fmt::Display,
{
    /// Create a new analyzer.
    ///
    /// The store arrives pre-wrapped in a mutex so callers can share the
    /// same handle (the web layer reads recent examples through it too);
    /// the mutex also serializes writes.
    pub fn new(provider: C, store: Arc<Mutex<S>>, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            store,
            config,
        }
    }

    /// Analyze a brief end to end.
    ///
    /// 1. Fetch recent examples from the store
    /// 2. Build the few-shot prompt and call the model
    /// 3. Persist the new (brief, reply) pair
    /// 4. Segment the reply into reasoning and breakdown
    pub async fn analyze(&self, brief_text: &str) -> Result<Analysis, AnalyzeError> {
        let brief = brief_text.trim();
        if brief.is_empty() {
            return Err(AnalyzeError::EmptyBrief);
        }
        if brief.len() > self.config.max_brief_length {
            return Err(AnalyzeError::BriefTooLong(
                brief.len(),
                self.config.max_brief_length,
            ));
        }

        let examples = self.recent_examples();
        info!(
            brief_len = brief.len(),
            examples = examples.len(),
            "starting analysis"
        );

        let messages = PromptBuilder::new(brief).with_examples(examples).build();
        debug!(turns = messages.len(), "prompt built");

        let raw = self.provider.chat(&messages).await?;

        let saved = self.persist(brief, &raw);
        let segments = segment(&raw);

        info!(reply_len = raw.len(), saved, "analysis complete");

        Ok(Analysis {
            raw,
            reasoning: segments.reasoning,
            breakdown: segments.breakdown,
            saved,
        })
    }

    /// Probe the inference endpoint and count stored examples.
    pub async fn health(&self) -> Health {
        let llm_available = self.provider.available().await;
        let example_count = match self.store.lock() {
            Ok(store) => store.count().unwrap_or_else(|e| {
                warn!("could not count stored examples: {}", e);
                0
            }),
            Err(_) => 0,
        };

        Health {
            llm_available,
            example_count,
        }
    }

    // A failed read degrades to an un-primed prompt rather than failing
    // the analysis.
    fn recent_examples(&self) -> Vec<briefdeck_domain::Example> {
        match self.store.lock() {
            Ok(store) => match store.recent(self.config.example_limit) {
                Ok(examples) => examples,
                Err(e) => {
                    warn!("could not load few-shot examples: {}", e);
                    Vec::new()
                }
            },
            Err(_) => {
                warn!("example store lock poisoned; proceeding without examples");
                Vec::new()
            }
        }
    }

    // A failed write degrades to saved = false rather than losing the reply.
    fn persist(&self, brief: &str, raw: &str) -> bool {
        match self.store.lock() {
            Ok(mut store) => match store.record(brief, raw) {
                Ok(()) => true,
                Err(e) => {
                    warn!("analysis succeeded but was not saved: {}", e);
                    false
                }
            },
            Err(_) => {
                warn!("example store lock poisoned; analysis not saved");
                false
            }
        }
    }
}
