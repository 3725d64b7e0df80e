//! Command implementations.

mod analyze;
mod recent;
mod serve;

pub use analyze::execute_analyze;
pub use recent::execute_recent;
pub use serve::execute_serve;

use crate::config::Config;
use crate::error::Result;
use briefdeck_analyzer::Analyzer;
use briefdeck_llm::OllamaChat;
use briefdeck_store::SqliteStore;
use std::fs;
use std::sync::{Arc, Mutex};

/// Open the store and wire up the full analysis pipeline from config.
pub(crate) fn build_pipeline(
    config: &Config,
) -> Result<(Arc<Analyzer<OllamaChat, SqliteStore>>, Arc<Mutex<SqliteStore>>)> {
    let store = Arc::new(Mutex::new(open_store(config)?));
    let chat = OllamaChat::new(config.llm.clone());
    let analyzer = Arc::new(Analyzer::new(
        chat,
        Arc::clone(&store),
        config.analyzer.clone(),
    ));
    Ok((analyzer, store))
}

pub(crate) fn open_store(config: &Config) -> Result<SqliteStore> {
    if let Some(parent) = config.database.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(SqliteStore::open(&config.database)?)
}
