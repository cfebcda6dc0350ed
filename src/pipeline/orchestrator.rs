// file: src/pipeline/orchestrator.rs
// description: coordinates word list loading, file discovery, per-file processing and reporting
// reference: sequential batch workflow

use crate::config::Config;
use crate::error::Result;
use crate::exporter::{JsonExporter, ReportWriter};
use crate::models::{FileFailure, MatchRecord, StringHit, WordGroup};
use crate::parser::WordListLoader;
use crate::pipeline::processor::FileProcessor;
use crate::pipeline::progress::{ScanObserver, ScanStats};
use crate::repository::{FileScanner, ScannedFile};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Everything one run produced, in the order the reports need it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub stats: ScanStats,
    /// Discovery order, then word group order.
    pub matches: Vec<MatchRecord>,
    /// Deduplicated on (term, path).
    pub string_hits: Vec<StringHit>,
    pub failures: Vec<FileFailure>,
}

impl ScanOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct ScanOrchestrator {
    config: Config,
    limit: Option<usize>,
}

impl ScanOrchestrator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans, writes every configured report and logs a summary.
    pub fn run(&self, observer: &dyn ScanObserver) -> Result<ScanOutcome> {
        info!("Starting e-mail word scan");
        let outcome = self.scan(observer)?;
        self.write_reports(&outcome)?;
        self.log_final_stats(&outcome.stats);
        Ok(outcome)
    }

    pub fn scan(&self, observer: &dyn ScanObserver) -> Result<ScanOutcome> {
        let groups = self.load_word_groups();
        if groups.is_empty() {
            warn!("No word groups loaded; combination search will find nothing");
        }

        let files = self.discover_files()?;
        Ok(self.scan_files(&groups, &files, observer))
    }

    /// Fail-soft: a missing or malformed word list yields fewer groups.
    pub fn load_word_groups(&self) -> Vec<WordGroup> {
        WordListLoader::new(&self.config.wordlist).load_lenient(&self.config.wordlist.path)
    }

    pub fn discover_files(&self) -> Result<Vec<ScannedFile>> {
        let scanner = FileScanner::new(self.config.input.clone());
        let mut files = scanner.scan_directory(&self.config.input.root)?;

        if let Some(limit) = self.limit {
            files.truncate(limit);
        }

        Ok(files)
    }

    pub fn scan_files(
        &self,
        groups: &[WordGroup],
        files: &[ScannedFile],
        observer: &dyn ScanObserver,
    ) -> ScanOutcome {
        let start_time = Instant::now();
        let processor = FileProcessor::new(groups);

        let mut stats = ScanStats {
            files_discovered: files.len(),
            word_groups: groups.len(),
            ..ScanStats::new()
        };
        let mut matches = Vec::new();
        let mut string_hits = BTreeSet::new();
        let mut failures = Vec::new();

        observer.on_start(files.len());

        for file in files {
            let result = processor.process(file);
            observer.on_file_done(&result);

            stats.bytes_processed += result.bytes;
            if result.failure.is_none() {
                stats.files_scanned += 1;
            } else {
                stats.files_failed += 1;
            }

            matches.extend(result.matches);
            string_hits.extend(result.string_hits);
            failures.extend(result.failure);
        }

        stats.match_records = matches.len();
        stats.string_hits = string_hits.len();
        stats.duration_secs = start_time.elapsed().as_secs_f64();

        observer.on_finish(&stats);

        ScanOutcome {
            stats,
            matches,
            string_hits: string_hits.into_iter().collect(),
            failures,
        }
    }

    pub fn write_reports(&self, outcome: &ScanOutcome) -> Result<()> {
        let report = &self.config.report;

        let mut outputs: Vec<&Path> = vec![
            report.combinations_path.as_path(),
            report.strings_path.as_path(),
        ];
        outputs.extend(report.failures_path.as_deref());
        outputs.extend(report.json_path.as_deref());
        outputs.push(&self.config.wordlist.path);
        Validator::validate_distinct_outputs(&outputs)?;

        ReportWriter::write_combinations(&report.combinations_path, &outcome.matches)?;
        info!(
            "Combination report written: {}",
            report.combinations_path.display()
        );

        ReportWriter::write_strings(&report.strings_path, &outcome.string_hits)?;
        info!("Strings report written: {}", report.strings_path.display());

        if let Some(path) = &report.failures_path
            && outcome.has_failures()
        {
            ReportWriter::write_failures(path, &outcome.failures)?;
            warn!(
                "{} file(s) failed, see {}",
                outcome.failures.len(),
                path.display()
            );
        }

        if let Some(path) = &report.json_path {
            JsonExporter::new(path).export(outcome, true)?;
        }

        Ok(())
    }

    fn log_final_stats(&self, stats: &ScanStats) {
        info!("=== Scan Summary ===");
        info!("Duration: {:.2} seconds", stats.duration_secs);
        info!("Word groups: {}", stats.word_groups);
        info!("Files discovered: {}", stats.files_discovered);
        info!("Files scanned: {}", stats.files_scanned);
        info!("Files failed: {}", stats.files_failed);
        info!("Success rate: {:.2}%", stats.success_rate());
        info!("Combination matches: {}", stats.match_records);
        info!("String hits: {}", stats.string_hits);
        info!(
            "Processing speed: {:.2} files/sec",
            stats.files_per_second()
        );
        info!("====================");
    }
}
