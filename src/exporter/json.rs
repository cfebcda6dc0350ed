// file: src/exporter/json.rs
// description: json export of a complete scan outcome

use crate::error::{Result, ScanError};
use crate::models::{FileFailure, MatchRecord, StringHit};
use crate::pipeline::{ScanOutcome, ScanStats};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ScanExport<'a> {
    pub exported_at: String,
    pub stats: &'a ScanStats,
    pub matches: &'a [MatchRecord],
    pub string_hits: &'a [StringHit],
    pub failures: &'a [FileFailure],
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn export(&self, outcome: &ScanOutcome, pretty: bool) -> Result<()> {
        info!("Exporting scan results to {}", self.output_path.display());

        let export = ScanExport {
            exported_at: Utc::now().to_rfc3339(),
            stats: &outcome.stats,
            matches: &outcome.matches,
            string_hits: &outcome.string_hits,
            failures: &outcome.failures,
        };

        let body = if pretty {
            serde_json::to_string_pretty(&export)?
        } else {
            serde_json::to_string(&export)?
        };

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.output_path, body).map_err(|source| ScanError::Report {
            path: self.output_path.clone(),
            source,
        })?;

        info!(
            "Export complete: {} matches, {} string hits, {} failures",
            outcome.matches.len(),
            outcome.string_hits.len(),
            outcome.failures.len()
        );
        Ok(())
    }
}
