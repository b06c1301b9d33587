use std::{
    env,
    io::{self, Read},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::{OutputFormat, ScanCommand};
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::config::{ConfigLoadResult, load_config, load_config_file};
use crate::core::{Source, scan_with};

/// Scan the requested source and print what was found.
///
/// A scan that fails on its input is reported and yields
/// [`ExitStatus::Failure`]; configuration problems are returned as errors.
pub fn scan(cmd: &ScanCommand) -> Result<ExitStatus> {
    let loaded = load(cmd)?;
    let options = loaded.config.scan_options()?;

    let source: Source<'_> = if cmd.stdin {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read standard input")?;
        Source::from(bytes)
    } else {
        Source::from(
            cmd.source
                .as_deref()
                .unwrap_or(loaded.config.source_root.as_str()),
        )
    };

    match scan_with(source, &options) {
        Ok(result) => {
            match cmd.format {
                OutputFormat::Text => report::print_scan_result(&result),
                OutputFormat::Json => report::print_json(&result)?,
            }
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            debug!(error = ?err, "scan failed");
            report::print_scan_error(&err);
            Ok(ExitStatus::Failure)
        }
    }
}

fn load(cmd: &ScanCommand) -> Result<ConfigLoadResult> {
    let loaded = match &cmd.config {
        Some(path) => load_config_file(path)?,
        None => {
            let cwd = env::current_dir().context("Failed to resolve current directory")?;
            load_config(&cwd)?
        }
    };

    match &loaded.path {
        Some(path) => debug!(config = %path.display(), "loaded config"),
        None => debug!("no config file found, using defaults"),
    }
    Ok(loaded)
}
