//! Record processing and report assembly.
//!
//! This module handles the full pipeline from raw multi-record FASTA
//! text to a [`Report`]:
//! - splitting the input into (header, sequence) records
//! - alphabet validation over {A, C, G, T}, case-insensitive
//! - translation and Walker motif counting per record
//! - aggregation into per-record entries plus a running total
//!
//! A record failing validation is skipped with a notice and never
//! aborts the remaining records. Only an I/O failure while reading
//! the input file is fatal, and it fails the whole operation with no
//! partial report.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::codon::CodonTable;
use crate::motif::count_motifs;

/// Errors that abort report production entirely.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// A record whose sequence validated and translated successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    /// The record header (first line after '>', delimiter excluded).
    pub header: String,
    /// The translated protein, stop symbols included.
    pub protein: String,
    /// Number of Walker A motifs found in the protein.
    pub motif_count: usize,
    /// Codon windows dropped during translation. Empty for any
    /// sequence that passed alphabet validation; kept as a diagnostic
    /// for unexpected characters.
    pub skipped_codons: Vec<String>,
}

/// A record skipped because its sequence failed alphabet validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipNotice {
    pub header: String,
    pub reason: String,
}

/// One per-record outcome, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    Translated(ProteinRecord),
    Skipped(SkipNotice),
}

/// The complete processing result.
///
/// The summary (total proteins with at least one motif) is a
/// distinguished field so display layers emphasize it by structure,
/// never by counting characters of the rendered text.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Per-record outcomes, mirroring input order.
    pub entries: Vec<ReportEntry>,
    /// Number of proteins containing one or more Walker motifs.
    pub proteins_with_motif: usize,
}

impl Report {
    /// Renders the per-record section of the report.
    pub fn body(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            match entry {
                ReportEntry::Translated(record) => {
                    text.push_str(&format!("Header: {}\n\n", record.header));
                    text.push_str(&format!("Protein: {}\n\n", record.protein));
                    text.push_str(&format!(
                        "Number of Walker motifs: {}\n\n",
                        record.motif_count
                    ));
                }
                ReportEntry::Skipped(notice) => {
                    text.push_str(&format!(
                        "Skipping invalid cDNA sequence in {}\n\n",
                        notice.header
                    ));
                }
            }
        }
        text
    }

    /// Renders the aggregate summary line.
    pub fn summary(&self) -> String {
        format!(
            "Total number of proteins with one or more Walker motifs: {}",
            self.proteins_with_motif
        )
    }

    /// Renders the full report for batch output.
    pub fn render(&self) -> String {
        format!("{}{}\n", self.body(), self.summary())
    }
}

/// Processes raw multi-record FASTA text into a [`Report`].
///
/// The input is split on '>'; within each candidate record, line 0 is
/// the header and the remaining lines, with all whitespace removed,
/// form the nucleotide sequence. Candidates with an empty sequence
/// contribute nothing. Sequences are uppercased before validation, so
/// case never affects the outcome.
pub fn process(raw: &str) -> Report {
    let table = CodonTable::standard();
    let mut report = Report::default();

    for candidate in raw.trim().split('>') {
        let mut lines = candidate.lines();
        let header = lines.next().unwrap_or("").trim().to_string();
        let sequence: String = lines
            .flat_map(|line| line.chars())
            .filter(|c| !c.is_whitespace())
            .collect();

        if sequence.is_empty() {
            continue;
        }

        let sequence = sequence.to_uppercase();
        if !sequence.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T')) {
            report.entries.push(ReportEntry::Skipped(SkipNotice {
                header,
                reason: "invalid sequence".to_string(),
            }));
            continue;
        }

        let translation = table.translate(&sequence);
        let motif_count = count_motifs(&translation.protein);
        if motif_count > 0 {
            report.proteins_with_motif += 1;
        }

        report.entries.push(ReportEntry::Translated(ProteinRecord {
            header,
            protein: translation.protein,
            motif_count,
            skipped_codons: translation.skipped,
        }));
    }

    report
}

/// Reads a FASTA file and processes it into a [`Report`].
///
/// Any failure to open or read the file fails the whole operation;
/// no partial report is produced.
pub fn process_file<P: AsRef<Path>>(path: P) -> ReportResult<Report> {
    let raw = fs::read_to_string(path)?;
    Ok(process(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_end_to_end_example() {
        let report = process(">seq1\nATGGGTAAAGGGAAAGGTTCC\n>seq2\nNNZZZZ\n");

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.proteins_with_motif, 0);

        match &report.entries[0] {
            ReportEntry::Translated(record) => {
                assert_eq!(record.header, "seq1");
                assert_eq!(record.protein, "MGKGKGS");
                assert_eq!(record.motif_count, 0); // 7 symbols, below window width
            }
            other => panic!("expected translated record, got {:?}", other),
        }
        match &report.entries[1] {
            ReportEntry::Skipped(notice) => {
                assert_eq!(notice.header, "seq2");
                assert_eq!(notice.reason, "invalid sequence");
            }
            other => panic!("expected skip notice, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_and_continue_preserves_order() {
        let raw = ">rec1\nATGATG\n>rec2\nATNGG\n>rec3\nGGTGGT\n";
        let report = process(raw);

        assert_eq!(report.entries.len(), 3);
        assert!(matches!(report.entries[0], ReportEntry::Translated(_)));
        assert!(matches!(report.entries[1], ReportEntry::Skipped(_)));
        assert!(matches!(report.entries[2], ReportEntry::Translated(_)));

        // The invalid middle record must not disturb its neighbours
        if let ReportEntry::Translated(record) = &report.entries[0] {
            assert_eq!(record.protein, "MM");
        }
        if let ReportEntry::Translated(record) = &report.entries[2] {
            assert_eq!(record.protein, "GG");
        }
    }

    #[test]
    fn test_motif_total_counts_proteins_not_matches() {
        // GGA GCT GCT GCT GCT GGA AAA ACT GGA GCT GCT GCT GCT GGA AAA ACT
        // translates to GAAAAGKTGAAAAGKT: two motifs in one protein
        let raw = ">two_motifs\nGGAGCTGCTGCTGCTGGAAAAACTGGAGCTGCTGCTGCTGGAAAAACT\n";
        let report = process(raw);

        assert_eq!(report.proteins_with_motif, 1);
        if let ReportEntry::Translated(record) = &report.entries[0] {
            assert_eq!(record.protein, "GAAAAGKTGAAAAGKT");
            assert_eq!(record.motif_count, 2);
        }
    }

    #[test]
    fn test_empty_sequence_contributes_nothing() {
        // Header-only record and leading text before the first '>'
        let report = process(">empty\n>real\nATGATG\n");
        assert_eq!(report.entries.len(), 1);
    }

    #[test]
    fn test_wrapped_and_spaced_sequence_lines() {
        let report = process(">wrapped\nATG GGT\nAAA\n GGG \n");
        if let ReportEntry::Translated(record) = &report.entries[0] {
            assert_eq!(record.protein, "MGKG");
        } else {
            panic!("expected translated record");
        }
    }

    #[test]
    fn test_lowercase_sequence_is_valid() {
        let report = process(">lower\natgggtaaa\n");
        if let ReportEntry::Translated(record) = &report.entries[0] {
            assert_eq!(record.protein, "MGK");
        } else {
            panic!("expected translated record");
        }
    }

    #[test]
    fn test_body_and_summary_rendering() {
        let report = process(">seq1\nATGGGTAAAGGGAAAGGTTCC\n>seq2\nNNZZZZ\n");
        let body = report.body();

        assert!(body.contains("Header: seq1\n\n"));
        assert!(body.contains("Protein: MGKGKGS\n\n"));
        assert!(body.contains("Number of Walker motifs: 0\n\n"));
        assert!(body.contains("Skipping invalid cDNA sequence in seq2\n\n"));

        assert_eq!(
            report.summary(),
            "Total number of proteins with one or more Walker motifs: 0"
        );
        assert!(report.render().ends_with("Walker motifs: 0\n"));
    }

    #[test]
    fn test_process_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">seq1\nGGAGCTGCTGCTGCTGGAAAAACT\n").unwrap();

        let report = process_file(file.path()).unwrap();
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.proteins_with_motif, 1);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let result = process_file("/nonexistent/input.fasta");
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
