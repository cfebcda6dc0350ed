// file: src/exporter/report.rs
// description: plain text combination, string and failure reports
// reference: line-per-record text reports

use crate::error::{Result, ScanError};
use crate::models::{FileFailure, MatchRecord, StringHit};
use std::fs;
use std::path::Path;
use tracing::info;

pub const NO_MATCH_SENTINEL: &str = "Aucune correspondance trouvée !!";

pub struct ReportWriter;

impl ReportWriter {
    /// Records stay in discovery order.
    pub fn render_combinations(records: &[MatchRecord]) -> String {
        if records.is_empty() {
            return format!("{}\n", NO_MATCH_SENTINEL);
        }

        records
            .iter()
            .map(|record| format!("{}\n", Self::combination_line(record)))
            .collect()
    }

    pub fn combination_line(record: &MatchRecord) -> String {
        format!(
            "Recherche : A={} | B={} | Chemin du fichier : {}",
            format_term_list(&record.found_a),
            format_term_list(&record.found_b),
            record.file_path.display()
        )
    }

    /// Drops empty terms, then sorts by term and file name, with the full
    /// path as a tie-breaker.
    pub fn render_strings<'a>(hits: impl IntoIterator<Item = &'a StringHit>) -> String {
        let mut rows: Vec<(&StringHit, String)> = hits
            .into_iter()
            .filter(|hit| !hit.term.is_empty())
            .map(|hit| (hit, hit.file_name()))
            .collect();

        rows.sort_by(|(a, a_name), (b, b_name)| {
            a.term
                .cmp(&b.term)
                .then_with(|| a_name.cmp(b_name))
                .then_with(|| a.file_path.cmp(&b.file_path))
        });
        rows.dedup_by(|(a, _), (b, _)| a == b);

        rows.iter()
            .map(|(hit, file_name)| {
                format!(
                    "word found: {} | Chemin du fichier: {} | fileName: {}\n",
                    hit.term,
                    hit.file_path.display(),
                    file_name
                )
            })
            .collect()
    }

    pub fn render_failures(failures: &[FileFailure]) -> String {
        failures
            .iter()
            .map(|failure| {
                format!(
                    "Erreur ({}) : {} | Chemin du fichier : {}\n",
                    failure.stage,
                    failure.reason,
                    failure.file_path.display()
                )
            })
            .collect()
    }

    pub fn write_combinations(path: &Path, records: &[MatchRecord]) -> Result<()> {
        info!("Generating report: {}", path.display());
        write_report(path, &Self::render_combinations(records))
    }

    pub fn write_strings<'a>(
        path: &Path,
        hits: impl IntoIterator<Item = &'a StringHit>,
    ) -> Result<()> {
        info!("Generating strings report: {}", path.display());
        write_report(path, &Self::render_strings(hits))
    }

    pub fn write_failures(path: &Path, failures: &[FileFailure]) -> Result<()> {
        info!("Generating failures report: {}", path.display());
        write_report(path, &Self::render_failures(failures))
    }
}

fn write_report(path: &Path, body: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ScanError::Report {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, body).map_err(|source| ScanError::Report {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders terms the way a Python list literal prints: `['a', 'b']`,
/// switching to double quotes for a term that holds a single quote.
fn format_term_list(terms: &[String]) -> String {
    let items: Vec<String> = terms.iter().map(|term| quote_term(term)).collect();
    format!("[{}]", items.join(", "))
}

fn quote_term(term: &str) -> String {
    let quote = if term.contains('\'') && !term.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(term.len() + 2);
    quoted.push(quote);
    for c in term.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}
