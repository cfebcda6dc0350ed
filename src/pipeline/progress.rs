// file: src/pipeline/progress.rs
// description: progress reporting hooks and statistics for a scan run
// reference: uses indicatif for progress bars and tracks processing metrics

use crate::pipeline::processor::ProcessingResult;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanStats {
    pub files_discovered: usize,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub word_groups: usize,
    pub match_records: usize,
    pub string_hits: usize,
    pub bytes_processed: u64,
    pub duration_secs: f64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.files_scanned as f64 / self.duration_secs
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_scanned + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_scanned as f64 / total as f64) * 100.0
    }
}

/// Receives status updates from the scan loop. The pipeline itself never
/// prints; callers pick how progress is shown.
pub trait ScanObserver {
    fn on_start(&self, total_files: usize);
    fn on_file_done(&self, result: &ProcessingResult);
    fn on_finish(&self, stats: &ScanStats);
}

/// Reports through `tracing` only.
#[derive(Debug, Default)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_start(&self, total_files: usize) {
        info!("Processing {} message files", total_files);
    }

    fn on_file_done(&self, result: &ProcessingResult) {
        debug!(
            "Processed {}: {} combination(s), {} string hit(s)",
            result.file_path.display(),
            result.matches.len(),
            result.string_hits.len()
        );
    }

    fn on_finish(&self, stats: &ScanStats) {
        info!(
            "Scanned {} file(s), {} failed",
            stats.files_scanned, stats.files_failed
        );
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    files_failed: AtomicUsize,
    match_records: AtomicUsize,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::with_color(true)
    }

    pub fn with_color(colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            files_failed: AtomicUsize::new(0),
            match_records: AtomicUsize::new(0),
        }
    }

    pub fn position(&self) -> u64 {
        self.main_bar.position()
    }

    fn update_detail_bar(&self) {
        let matches = self.match_records.load(Ordering::Relaxed);
        let failed = self.files_failed.load(Ordering::Relaxed);

        self.detail_bar
            .set_message(format!("Combinations: {} | Failed: {}", matches, failed));
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanObserver for ProgressTracker {
    fn on_start(&self, total_files: usize) {
        self.main_bar.set_length(total_files as u64);
        self.main_bar.set_message("Processing .eml files");
    }

    fn on_file_done(&self, result: &ProcessingResult) {
        if result.failure.is_some() {
            self.files_failed.fetch_add(1, Ordering::Relaxed);
        }
        self.match_records
            .fetch_add(result.matches.len(), Ordering::Relaxed);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    fn on_finish(&self, _stats: &ScanStats) {
        self.main_bar.finish_with_message("Processing complete");
        self.detail_bar.finish_and_clear();
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        if !self.main_bar.is_finished() {
            self.main_bar.abandon();
        }
        self.detail_bar.finish_and_clear();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}"
    };
    let chars = if colored { "█▓▒░" } else { "=>-" };

    let style = ProgressStyle::default_bar()
        .template(template)
        .map(|style| style.progress_chars(chars))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FailureStage, FileFailure, MatchRecord};
    use std::path::{Path, PathBuf};

    fn result(matches: usize, failed: bool) -> ProcessingResult {
        let path = PathBuf::from("/m/a.eml");
        ProcessingResult {
            file_path: path.clone(),
            bytes: 10,
            matches: (0..matches)
                .map(|_| MatchRecord::new(vec!["a".into()], vec!["b".into()], &path))
                .collect(),
            string_hits: vec![],
            failure: failed
                .then(|| FileFailure::new(Path::new("/m/a.eml"), FailureStage::Read, "gone")),
        }
    }

    #[test]
    fn test_scan_stats_calculations() {
        let stats = ScanStats {
            files_scanned: 90,
            files_failed: 10,
            duration_secs: 10.0,
            ..ScanStats::new()
        };

        assert_eq!(stats.files_per_second(), 9.0);
        assert!((stats.success_rate() - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_scan_stats_zero_duration() {
        let stats = ScanStats::new();
        assert_eq!(stats.files_per_second(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counts() {
        let tracker = ProgressTracker::with_color(false);
        tracker.on_start(3);
        tracker.on_file_done(&result(2, false));
        tracker.on_file_done(&result(0, true));

        assert_eq!(tracker.position(), 2);
        assert_eq!(tracker.match_records.load(Ordering::Relaxed), 2);
        assert_eq!(tracker.files_failed.load(Ordering::Relaxed), 1);
        tracker.on_finish(&ScanStats::new());
    }
}
