//! Identity and gap statistics for pairwise alignments

use crate::coords::NormalizedHsp;
use crate::error::{GeometryError, GeometryResult};
use crate::types::{Algorithm, GAP};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentStats {
    pub identities: usize,
    /// Identities over the gapped alignment length, 0..=100
    pub identity_pct: f64,
    pub gaps: usize,
    pub gap_pct: f64,
    /// Alignment length including gaps
    pub length: usize,
}

impl AlignmentStats {
    /// `"n/len (pp.pp%)"`
    pub fn identities_label(&self) -> String {
        format!("{}/{} ({:.2}%)", self.identities, self.length, self.identity_pct)
    }

    pub fn gaps_label(&self) -> String {
        format!("{}/{} ({:.2}%)", self.gaps, self.length, self.gap_pct)
    }
}

/// Count identities and gaps over two aligned sequences.
///
/// Identity is plain byte equality, so a column where both sides are gaps
/// counts as an identity. Percentages are taken over the full gapped length.
pub fn compute_alignment_stats(seq_a: &str, seq_b: &str) -> GeometryResult<AlignmentStats> {
    if seq_a.len() != seq_b.len() {
        return Err(GeometryError::invalid_input(format!(
            "aligned sequences differ in length ({} vs {})",
            seq_a.len(),
            seq_b.len()
        )));
    }

    let length = seq_a.len();
    let (identities, gaps) = seq_a
        .bytes()
        .zip(seq_b.bytes())
        .fold((0usize, 0usize), |(identities, gaps), (a, b)| {
            (
                identities + usize::from(a == b),
                gaps + usize::from(a == GAP || b == GAP),
            )
        });

    let pct = |n: usize| {
        if length == 0 {
            0.0
        } else {
            n as f64 / length as f64 * 100.0
        }
    };

    Ok(AlignmentStats {
        identities,
        identity_pct: pct(identities),
        gaps,
        gap_pct: pct(gaps),
        length,
    })
}

/// Header label for one aligned sequence: strand for nucleotide searches,
/// signed frame for the translated and protein searches.
pub fn segment_label(algorithm: Algorithm, frame: i32) -> String {
    if algorithm.is_nucleotide() {
        format!("Strand: {}", if frame >= 0 { "plus" } else { "minus" })
    } else {
        format!("Frame: {}", frame)
    }
}

/// Statistics header shown above a pairwise alignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentSummary {
    pub score: f64,
    pub evalue: f64,
    pub algorithm: Algorithm,
    pub stats: AlignmentStats,
    pub query_name: String,
    pub query_label: String,
    pub hit_name: String,
    pub hit_label: String,
}

impl AlignmentSummary {
    pub fn from_hsp(hsp: &NormalizedHsp) -> GeometryResult<Self> {
        let stats = compute_alignment_stats(&hsp.query.seq, &hsp.hit.seq)?;
        Ok(Self {
            score: hsp.score,
            evalue: hsp.evalue,
            algorithm: hsp.algorithm,
            stats,
            query_name: hsp.query.name.clone(),
            query_label: segment_label(hsp.algorithm, hsp.query.frame),
            hit_name: hsp.hit.name.clone(),
            hit_label: segment_label(hsp.algorithm, hsp.hit.frame),
        })
    }
}

impl fmt::Display for AlignmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score:      {:.2}", self.score)?;
        writeln!(f, "Expect:     {:.2e}", self.evalue)?;
        writeln!(f, "Identities: {}", self.stats.identities_label())?;
        writeln!(f, "Gaps:       {}", self.stats.gaps_label())?;
        writeln!(f, "{}: {}", self.query_name, self.query_label)?;
        writeln!(f, "{}: {}", self.hit_name, self.hit_label)?;
        write!(f, "Algorithm:  {}", self.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::normalize_hsp;
    use crate::types::{AlignedSegment, HspRecord};

    #[test]
    fn test_identical_sequences() {
        let stats = compute_alignment_stats("ACGT", "ACGT").unwrap();
        assert_eq!(stats.identities, 4);
        assert_eq!(stats.gaps, 0);
        assert_eq!(stats.identity_pct, 100.0);
        assert_eq!(stats.gap_pct, 0.0);
    }

    #[test]
    fn test_single_gap() {
        // A==A, '-' vs C, G==G, T==T
        let stats = compute_alignment_stats("A-GT", "ACGT").unwrap();
        assert_eq!(stats.gaps, 1);
        assert_eq!(stats.identities, 3);
        assert_eq!(stats.identity_pct, 75.0);
        assert_eq!(stats.gap_pct, 25.0);
    }

    #[test]
    fn test_double_gap_counts_as_identity() {
        let stats = compute_alignment_stats("A-G", "A-C").unwrap();
        assert_eq!(stats.identities, 2);
        assert_eq!(stats.gaps, 1);
        assert_eq!(stats.length, 3);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            compute_alignment_stats("ACGT", "ACG"),
            Err(GeometryError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_alignment() {
        let stats = compute_alignment_stats("", "").unwrap();
        assert_eq!(stats.identities, 0);
        assert_eq!(stats.identity_pct, 0.0);
        assert_eq!(stats.gap_pct, 0.0);
    }

    #[test]
    fn test_labels() {
        let stats = compute_alignment_stats("AC-T", "ACGA").unwrap();
        assert_eq!(stats.identities_label(), "2/4 (50.00%)");
        assert_eq!(stats.gaps_label(), "1/4 (25.00%)");

        assert_eq!(segment_label(Algorithm::Blastn, 1), "Strand: plus");
        assert_eq!(segment_label(Algorithm::Blastn, 0), "Strand: plus");
        assert_eq!(segment_label(Algorithm::Blastn, -1), "Strand: minus");
        assert_eq!(segment_label(Algorithm::Tblastx, -2), "Frame: -2");
        assert_eq!(segment_label(Algorithm::Blastp, 0), "Frame: 0");
    }

    #[test]
    fn test_summary_from_hsp() {
        let record = HspRecord::new(
            AlignedSegment::new(1, 1, "ACGT"),
            AlignedSegment::new(10, -1, "ACGA"),
            "||| ",
        )
        .with_scores(55.5, 2e-12);
        let hsp = normalize_hsp(&record, "Sequence", "RefSeq").unwrap();
        let summary = AlignmentSummary::from_hsp(&hsp).unwrap();

        assert_eq!(summary.stats.identities, 3);
        assert_eq!(summary.hit_label, "Strand: minus");
        let text = summary.to_string();
        assert!(text.contains("Score:      55.50"));
        assert!(text.contains("Identities: 3/4 (75.00%)"));
        assert!(text.contains("RefSeq: Strand: minus"));
    }
}
