//! Helpers for gapped sequence strings

use crate::types::GAP;

/// Number of residues in a gapped sequence
pub fn ungapped_len(seq: &str) -> usize {
    seq.bytes().filter(|&b| b != GAP).count()
}

/// Sequence with gap characters removed
pub fn strip_gaps(seq: &str) -> String {
    seq.chars().filter(|&c| c != GAP as char).collect()
}

/// Reverse complement of a nucleotide sequence.
///
/// A/C/G/T are complemented case-insensitively and emitted in uppercase.
/// Anything else (gaps, N, other ambiguity codes) is kept but lowercased so
/// non-standard bases stand out. Applying this twice therefore yields the
/// input with A/C/G/T uppercased and every other character lowercased.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| match c.to_ascii_uppercase() {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Plain character reversal, used for midlines
pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}
