//! Codon table and nucleotide-to-protein translation.
//!
//! This module provides:
//! - The standard genetic code as an immutable 64-codon table
//! - Translation of nucleotide sequences in reading frame +1
//!
//! Stop codons translate to `*` and translation continues past them;
//! the full codon-windowed length is always translated. A trailing
//! partial codon (1 or 2 nucleotides) never forms a window and is
//! dropped.

use std::collections::HashMap;

/// Amino acids for the standard code (NCBI table 1), in NCBI codon
/// order: TTT, TTC, TTA, TTG, TCT, TCC, ... (Base1, Base2, Base3).
const STANDARD_NCBIEAA: &str =
    "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// A codon to amino-acid mapping covering all 64 codons over
/// {A, C, G, T}.
#[derive(Debug, Clone)]
pub struct CodonTable {
    table: HashMap<String, char>,
}

/// The outcome of translating one nucleotide sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Amino-acid symbols, one per complete codon found in the table.
    pub protein: String,
    /// Codon windows that were not in the table and were skipped.
    /// Always empty for sequences over {A, C, G, T}; recorded instead
    /// of aborting the record when unexpected characters slip through.
    pub skipped: Vec<String>,
}

impl CodonTable {
    /// Builds the standard genetic code from its NCBI format string.
    pub fn standard() -> Self {
        let bases = ['T', 'C', 'A', 'G'];
        let mut table = HashMap::with_capacity(64);

        let mut amino_acids = STANDARD_NCBIEAA.chars();
        for &b1 in &bases {
            for &b2 in &bases {
                for &b3 in &bases {
                    let codon = format!("{}{}{}", b1, b2, b3);
                    // 64 codons, 64 symbols: the iterator cannot run dry
                    table.insert(codon, amino_acids.next().unwrap_or('X'));
                }
            }
        }

        Self { table }
    }

    /// Looks up a single codon.
    ///
    /// Returns `None` for any 3-character string outside the 64-codon
    /// domain (lowercase input included; callers uppercase first).
    pub fn lookup(&self, codon: &str) -> Option<char> {
        self.table.get(codon).copied()
    }

    /// Translates a nucleotide sequence to amino acids.
    ///
    /// The sequence is partitioned into consecutive non-overlapping
    /// 3-character windows starting at offset 0. Each window found in
    /// the table appends its amino acid to the protein; a window not
    /// in the table is skipped and recorded in
    /// [`Translation::skipped`]. The trailing 1- or 2-character
    /// remainder, if any, is dropped.
    ///
    /// Pure: translating the same sequence twice yields identical
    /// output.
    pub fn translate(&self, sequence: &str) -> Translation {
        let chars: Vec<char> = sequence.chars().collect();
        let mut protein = String::with_capacity(chars.len() / 3);
        let mut skipped = Vec::new();

        let mut pos = 0;
        while pos + 3 <= chars.len() {
            let codon: String = chars[pos..pos + 3].iter().collect();
            match self.lookup(&codon) {
                Some(aa) => protein.push(aa),
                None => skipped.push(codon),
            }
            pos += 3;
        }

        Translation { protein, skipped }
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}
