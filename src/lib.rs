//! # walkerscan - cDNA Translation and Walker Motif Counter
//!
//! Translates FASTA nucleotide sequences to proteins under the
//! standard genetic code and counts Walker A (P-loop) motifs in each
//! protein, presenting the results in a scrollable terminal view.
//!
//! ## Architecture
//!
//! The core pipeline is pure data transformation with no reference to
//! any terminal handle, so it is equally callable from tests or a
//! batch entry point:
//! - `codon`: the standard codon table and sequence translation
//! - `motif`: Walker A motif window scanning
//! - `report`: record splitting, validation, and report assembly
//!
//! The presentation shell follows an event-driven split:
//! - `model`: viewer state (wrapped report text, scrolling, modes)
//! - `event`: keyboard event handling
//! - `ui`: TUI rendering with ratatui
//! - `controller`: orchestration of the terminal loop

pub mod codon;
pub mod controller;
pub mod event;
pub mod model;
pub mod motif;
pub mod report;
pub mod ui;
