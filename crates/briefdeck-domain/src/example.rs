//! Stored analysis examples

/// One past analysis: a brief and the breakdown the model produced for it.
///
/// Examples are append-only. Once recorded they are never mutated or deleted
/// by the core; they exist to be replayed as few-shot context for future
/// analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Full extracted text of the past assignment brief
    pub brief_text: String,

    /// The model-produced breakdown associated with that brief
    pub breakdown_text: String,

    /// Unix timestamp assigned at insertion, used only for recency ordering
    pub created_at: i64,
}

impl Example {
    /// Create a new example.
    ///
    /// `created_at` is normally assigned by the store; this constructor is
    /// mainly useful in tests and when building synthetic context.
    pub fn new(
        brief_text: impl Into<String>,
        breakdown_text: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            brief_text: brief_text.into(),
            breakdown_text: breakdown_text.into(),
            created_at,
        }
    }
}
