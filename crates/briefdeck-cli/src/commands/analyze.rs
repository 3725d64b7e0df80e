//! The analyze command: file in, two sections out.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use tracing::info;

/// Extract a brief from a local file and run the full pipeline.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let bytes = fs::read(&args.file)?;
    let filename = args.file.to_string_lossy();

    let media_type = briefdeck_extract::media_type_for_path(&args.file)
        .ok_or_else(|| briefdeck_extract::ExtractError::UnsupportedType(filename.to_string()))?;

    info!(file = %filename, bytes = bytes.len(), "extracting brief");
    let brief_text = briefdeck_extract::extract(&bytes, media_type)?;

    let (analyzer, _store) = super::build_pipeline(config)?;
    let analysis = analyzer.analyze(&brief_text).await?;

    formatter.print_analysis(&analysis, args.raw);
    Ok(())
}
