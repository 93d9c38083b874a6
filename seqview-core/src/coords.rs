//! Coordinate and frame normalization
//!
//! Backends report an aligned segment as a single anchor coordinate plus a
//! signed frame: a non-negative frame anchors the segment at its left end, a
//! negative frame anchors it at its right end. Everything here turns that
//! convention into forward-strand `[start, end]` intervals.

use crate::error::{GeometryError, GeometryResult};
use crate::sequence::{reverse, reverse_complement, ungapped_len};
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Normalize one aligned segment.
///
/// The extent is `ungapped(gapped_seq) * step` positions. Frame 0 counts as
/// forward. Strings are never touched; callers that need display-oriented
/// sequences reverse them themselves when the orientation is `Reverse`.
pub fn normalize_feature(
    start: Position,
    frame: i32,
    gapped_seq: &str,
    step: u32,
) -> GeometryResult<NormalizedFeature> {
    if step == 0 {
        return Err(GeometryError::invalid_record("coordinate step must be positive"));
    }
    let residues = ungapped_len(gapped_seq);
    if residues == 0 {
        return Err(GeometryError::invalid_record(format!(
            "aligned sequence at {} has no residues",
            start
        )));
    }

    let out_of_range = || {
        GeometryError::invalid_record(format!(
            "segment at {} spanning {} residues overflows the coordinate range",
            start, residues
        ))
    };
    // Span minus one, so the far end is a single checked add or subtract
    let reach = Position::try_from(residues)
        .ok()
        .and_then(|r| r.checked_mul(Position::from(step)))
        .map(|extent| extent - 1)
        .ok_or_else(out_of_range)?;

    let feature = if frame >= 0 {
        NormalizedFeature {
            start,
            end: start.checked_add(reach).ok_or_else(out_of_range)?,
            orientation: Orientation::Forward,
            payload: FeaturePayload::default(),
        }
    } else {
        NormalizedFeature {
            start: start.checked_sub(reach).ok_or_else(out_of_range)?,
            end: start,
            orientation: Orientation::Reverse,
            payload: FeaturePayload::default(),
        }
    };
    Ok(feature)
}

/// One side of a normalized HSP, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrientedSegment {
    pub name: String,
    pub feature: NormalizedFeature,
    pub frame: i32,
    /// Gapped sequence in display orientation
    pub seq: String,
    /// Nucleotides per aligned residue on this axis
    pub step: u32,
}

/// HSP with both sides normalized and the query shown on its forward strand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedHsp {
    pub query: OrientedSegment,
    pub hit: OrientedSegment,
    pub midline: String,
    pub score: f64,
    pub evalue: f64,
    pub algorithm: Algorithm,
}

impl NormalizedHsp {
    /// Number of alignment columns
    pub fn columns(&self) -> usize {
        self.query.seq.len()
    }

    /// Fragment for a sequence map: the query extent, pointing in the
    /// direction of the hit.
    pub fn map_fragment(&self, hsp_index: usize) -> NormalizedFeature {
        let mut feature = NormalizedFeature::new(
            self.query.feature.start,
            self.query.feature.end,
            self.hit.feature.orientation,
        );
        feature.payload = FeaturePayload {
            score: Some(self.score),
            evalue: Some(self.evalue),
            tooltip: Some(format!("Bitscore: {} E-value: {}", self.score, self.evalue)),
            hsp_index: Some(hsp_index),
            ..FeaturePayload::default()
        };
        feature
    }

    /// Map fragment classed by whether the query frame matches an ORF's frame
    pub fn map_fragment_for_orf(&self, hsp_index: usize, orf: &OrfFrame) -> NormalizedFeature {
        let mut feature = self.map_fragment(hsp_index);
        let (class_name, note) = if orf.matches(self.query.frame) {
            ("homology-sameframe", "same frame as ORF")
        } else {
            ("homology-otherframe", "different frame than ORF")
        };
        feature.payload.class_name = Some(class_name.to_string());
        feature.payload.tooltip = Some(format!("Bitscore: {} E-value: {} ({})", self.score, self.evalue, note));
        feature
    }
}

/// Normalize a whole HSP.
///
/// When the query was aligned on its reverse strand, both aligned strings are
/// reverse-complemented and the midline reversed, so the query reads forward
/// and the hit orientation flips.
pub fn normalize_hsp(record: &HspRecord, query_name: &str, hit_name: &str) -> GeometryResult<NormalizedHsp> {
    let columns = record.query.seq.len();
    if record.hit.seq.len() != columns {
        return Err(GeometryError::invalid_record(format!(
            "query and hit alignments differ in length ({} vs {})",
            columns,
            record.hit.seq.len()
        )));
    }
    // An absent midline is allowed; a present one must line up
    if !record.midline.is_empty() && record.midline.len() != columns {
        return Err(GeometryError::invalid_record(format!(
            "midline length {} does not match alignment length {}",
            record.midline.len(),
            columns
        )));
    }

    let query_step = record.algorithm.query_step();
    let hit_step = record.algorithm.hit_step();
    let mut query_feature = normalize_feature(record.query.start, record.query.frame, &record.query.seq, query_step)?;
    let mut hit_feature = normalize_feature(record.hit.start, record.hit.frame, &record.hit.seq, hit_step)?;

    let mut query_seq = record.query.seq.clone();
    let mut hit_seq = record.hit.seq.clone();
    let mut midline = record.midline.clone();
    let mut query_frame = record.query.frame;
    let mut hit_frame = record.hit.frame;

    if query_feature.orientation == Orientation::Reverse {
        log::debug!(
            "Inverting HSP {}..{} so the query reads forward",
            query_feature.start,
            query_feature.end
        );
        query_seq = reverse_complement(&query_seq);
        hit_seq = reverse_complement(&hit_seq);
        midline = reverse(&midline);
        query_frame = -query_frame;
        hit_frame = -hit_frame;
        query_feature.orientation = Orientation::Forward;
        hit_feature.orientation = hit_feature.orientation.flipped();
    }

    Ok(NormalizedHsp {
        query: OrientedSegment {
            name: query_name.to_string(),
            feature: query_feature,
            frame: query_frame,
            seq: query_seq,
            step: query_step,
        },
        hit: OrientedSegment {
            name: hit_name.to_string(),
            feature: hit_feature,
            frame: hit_frame,
            seq: hit_seq,
            step: hit_step,
        },
        midline,
        score: record.score,
        evalue: record.evalue,
        algorithm: record.algorithm,
    })
}

/// Open reading frame classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrfClass {
    Predicted,
    Putative,
    NTerminal,
    CTerminal,
    Partial,
    Ptc,
}

impl OrfClass {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "putative" => OrfClass::Putative,
            "n-terminal" => OrfClass::NTerminal,
            "c-terminal" => OrfClass::CTerminal,
            "partial" => OrfClass::Partial,
            "ptc" => OrfClass::Ptc,
            _ => OrfClass::Predicted,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            OrfClass::Predicted => "orf-predicted",
            OrfClass::Putative => "orf-putative",
            OrfClass::NTerminal => "orf-nterminal",
            OrfClass::CTerminal => "orf-cterminal",
            OrfClass::Partial => "orf-partial",
            OrfClass::Ptc => "orf-ptc",
        }
    }
}

/// Map fragment for an ORF.
///
/// `orf_start` is 1-based; a negative value places the ORF on the reverse
/// strand, counted from the end of the sequence (-1 is the last position).
pub fn orf_fragment(
    class: &str,
    description: &str,
    orf_start: Position,
    orf_length: Position,
    seq_length: Position,
) -> GeometryResult<NormalizedFeature> {
    if orf_length <= 0 {
        return Err(GeometryError::invalid_record(format!("ORF length {} is not positive", orf_length)));
    }
    if orf_start == 0 {
        return Err(GeometryError::invalid_record("ORF start must be non-zero"));
    }

    let out_of_range = || {
        GeometryError::invalid_record(format!(
            "ORF at {} of length {} overflows the coordinate range",
            orf_start, orf_length
        ))
    };

    let orf_class = OrfClass::from_name(class);
    let (start, orientation, outline) = if orf_start < 0 {
        // -1 is the last position, so the ORF ends at seq_length + orf_start + 1
        let end = seq_length
            .checked_add(orf_start)
            .and_then(|e| e.checked_add(1))
            .ok_or_else(out_of_range)?;
        let start = end.checked_sub(orf_length - 1).ok_or_else(out_of_range)?;
        (start, Orientation::Reverse, "orf-outline minus")
    } else {
        (orf_start, Orientation::Forward, "orf-outline plus")
    };
    let end = start.checked_add(orf_length - 1).ok_or_else(out_of_range)?;

    let payload = FeaturePayload {
        text: Some(class.to_string()),
        tooltip: Some(description.to_string()),
        class_name: Some(format!("{} {}", outline, orf_class.class_name())),
        ..FeaturePayload::default()
    };
    Ok(NormalizedFeature {
        start,
        end,
        orientation,
        payload,
    })
}

/// Strand and reading frame of an ORF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrfFrame {
    /// Plus strand
    pub sense: bool,
    /// 1, 2 or 3
    pub frame: u8,
}

impl OrfFrame {
    /// Frame with the strand as its sign, as HSP frames are reported
    pub fn signed(&self) -> i32 {
        let frame = i32::from(self.frame);
        if self.sense {
            frame
        } else {
            -frame
        }
    }

    pub fn title(&self) -> String {
        let direction = if self.sense { "5' » 3'" } else { "3' » 5'" };
        format!("{}, frame {}", direction, self.frame)
    }

    pub fn matches(&self, frame: i32) -> bool {
        self.signed() == frame
    }
}

/// Reading frame of an ORF from its signed start. The frame is the start
/// modulo 3, with 0 read as frame 3; a negative start is the minus strand.
pub fn orf_frame(orf_start: Position) -> GeometryResult<OrfFrame> {
    if orf_start == 0 {
        return Err(GeometryError::invalid_record("ORF start must be non-zero"));
    }
    let index = (orf_start.unsigned_abs() % 3) as u8;
    Ok(OrfFrame {
        sense: orf_start > 0,
        frame: if index == 0 { 3 } else { index },
    })
}
