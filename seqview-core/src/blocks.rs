//! Splitting alignments into fixed-width display lines with per-line
//! start/end coordinates.

use crate::coords::{NormalizedHsp, OrientedSegment};
use crate::sequence::ungapped_len;
use crate::types::{Orientation, Position};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LINE_LENGTH: usize = 60;

/// One sequence on one display line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLine {
    pub seq: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentBlock {
    pub query: BlockLine,
    pub midline: String,
    pub hit: BlockLine,
}

/// Running coordinate along one aligned sequence
#[derive(Debug, Clone, Copy)]
struct Cursor {
    pos: Position,
    inc: Position,
}

impl Cursor {
    fn for_segment(segment: &OrientedSegment) -> Self {
        let step = segment.step as Position;
        match segment.feature.orientation {
            Orientation::Reverse => Cursor { pos: segment.feature.end, inc: -step },
            _ => Cursor { pos: segment.feature.start, inc: step },
        }
    }

    /// Consume `residues` residues; returns the first and last coordinate
    /// shown for them. An all-gap chunk reports the position just before.
    fn advance(&mut self, residues: usize) -> (Position, Position) {
        let start = self.pos;
        self.pos += self.inc * residues as Position;
        (start, self.pos - self.inc)
    }

    fn line(&mut self, seq: String) -> BlockLine {
        let (start, end) = self.advance(ungapped_len(&seq));
        BlockLine { seq, start, end }
    }
}

fn effective_line_length(line_length: usize) -> usize {
    if line_length == 0 {
        DEFAULT_LINE_LENGTH
    } else {
        line_length
    }
}

fn chunk(chars: &[char], from: usize, len: usize) -> String {
    let to = (from + len).min(chars.len());
    chars.get(from..to).map(|c| c.iter().collect()).unwrap_or_default()
}

/// Lay out a normalized HSP as pairwise alignment lines
pub fn pairwise_blocks(hsp: &NormalizedHsp, line_length: usize) -> Vec<AlignmentBlock> {
    let width = effective_line_length(line_length);
    let query: Vec<char> = hsp.query.seq.chars().collect();
    let hit: Vec<char> = hsp.hit.seq.chars().collect();
    let midline: Vec<char> = hsp.midline.chars().collect();

    let mut query_cursor = Cursor::for_segment(&hsp.query);
    let mut hit_cursor = Cursor::for_segment(&hsp.hit);

    (0..query.len())
        .step_by(width)
        .map(|pos| AlignmentBlock {
            query: query_cursor.line(chunk(&query, pos, width)),
            midline: chunk(&midline, pos, width),
            hit: hit_cursor.line(chunk(&hit, pos, width)),
        })
        .collect()
}

/// Row of a multiple sequence alignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsaRow {
    pub name: String,
    pub start: Position,
    pub seq: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultipleBlock {
    pub lines: Vec<BlockLine>,
    pub consensus: Option<BlockLine>,
}

/// Lay out a multiple alignment. The alignment is cut to its shortest row;
/// every row advances by `residue_step` per residue, the consensus by
/// `residue_step` per column starting at 1.
pub fn multiple_blocks(
    rows: &[MsaRow],
    consensus: Option<&str>,
    line_length: usize,
    residue_step: u32,
) -> Vec<MultipleBlock> {
    let width = effective_line_length(line_length);
    let step = residue_step.max(1) as Position;
    let alignment_len = rows.iter().map(|r| r.seq.chars().count()).min().unwrap_or(0);

    let seqs: Vec<Vec<char>> = rows.iter().map(|r| r.seq.chars().collect()).collect();
    let mut cursors: Vec<Cursor> = rows.iter().map(|r| Cursor { pos: r.start, inc: step }).collect();
    let consensus: Option<Vec<char>> = consensus.map(|c| c.chars().collect());
    let mut consensus_cursor = Cursor { pos: 1, inc: step };

    (0..alignment_len)
        .step_by(width)
        .map(|pos| {
            // Longer rows are cut at the shortest one
            let take = width.min(alignment_len - pos);
            let lines = seqs
                .iter()
                .zip(cursors.iter_mut())
                .map(|(seq, cursor)| cursor.line(chunk(seq, pos, take)))
                .collect();
            let consensus = consensus.as_ref().map(|c| {
                let seq = chunk(c, pos, take);
                let (start, end) = consensus_cursor.advance(seq.chars().count());
                BlockLine { seq, start, end }
            });
            MultipleBlock { lines, consensus }
        })
        .collect()
}
