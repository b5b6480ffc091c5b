//! Walker A motif scanning.
//!
//! The Walker A (P-loop) nucleotide-binding motif is matched as the
//! fixed positional pattern `GXXXXGK[T/S]`: an 8-symbol window whose
//! positions 0, 5 and 6 are G, G and K, whose position 7 is T or S,
//! and whose positions 1-4 are unconstrained.

/// Width of the motif window.
pub const MOTIF_LEN: usize = 8;

fn window_matches(window: &[u8]) -> bool {
    window[0] == b'G'
        && window[5] == b'G'
        && window[6] == b'K'
        && (window[7] == b'T' || window[7] == b'S')
}

/// Counts Walker A motif occurrences in a protein sequence.
///
/// Every window of 8 consecutive symbols is tested independently, so
/// overlapping matches are all counted. A protein shorter than 8
/// symbols has no windows and always counts 0; the number of windows
/// examined is `max(0, n - 7)`.
pub fn count_motifs(protein: &str) -> usize {
    let symbols = protein.as_bytes();
    if symbols.len() < MOTIF_LEN {
        return 0;
    }
    symbols.windows(MOTIF_LEN).filter(|w| window_matches(w)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_positive_match() {
        // 0='G', 5='G', 6='K', 7='T'
        assert_eq!(count_motifs("GAAAAGKT"), 1);
        assert_eq!(count_motifs("GAAAAGKS"), 1);
    }

    #[test]
    fn test_wildcard_positions_unconstrained() {
        assert_eq!(count_motifs("GWYRHGKT"), 1);
        assert_eq!(count_motifs("G****GKS"), 1);
    }

    #[test]
    fn test_position_constraints() {
        assert_eq!(count_motifs("AAAAAGKT"), 0); // position 0 not G
        assert_eq!(count_motifs("GAAAAAKT"), 0); // position 5 not G
        assert_eq!(count_motifs("GAAAAGGT"), 0); // position 6 not K
        assert_eq!(count_motifs("GAAAAGKA"), 0); // position 7 not T/S
    }

    #[test]
    fn test_short_protein_counts_zero() {
        assert_eq!(count_motifs(""), 0);
        assert_eq!(count_motifs("G"), 0);
        assert_eq!(count_motifs("GAAAAGK"), 0); // 7 symbols, no window
    }

    #[test]
    fn test_overlapping_matches_all_counted() {
        // Matches at offsets 0 (GAAAGGKT) and 4 (GKTAGKS ... s[4..12])
        assert_eq!(count_motifs("GAAAGGKTAGKS"), 2);
    }

    #[test]
    fn test_match_not_at_start() {
        assert_eq!(count_motifs("MMGAAAAGKTMM"), 1);
    }

    #[test]
    fn test_window_count_law() {
        // A protein of all 'G' can only match where position 6 is 'K',
        // so it never matches; the scan must still terminate for any n.
        for n in 0..20 {
            let protein: String = "G".repeat(n);
            assert_eq!(count_motifs(&protein), 0);
        }
    }
}
