//! The recent command: list stored analyses.

use crate::cli::RecentArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use briefdeck_domain::traits::ExampleStore;

/// List the most recently stored analyses, newest first.
pub fn execute_recent(args: RecentArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let store = super::open_store(config)?;
    let examples = store.recent(args.limit)?;
    formatter.print_recent(&examples);
    Ok(())
}
