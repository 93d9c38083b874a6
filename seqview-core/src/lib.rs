// SeqView Core Library
// Alignment geometry behind the sequence maps and alignment panels of a genomics browser

//! SeqView Core
//!
//! Turns parsed alignment hits into orientation-correct, forward-strand
//! features, orders them into map tracks, and computes alignment statistics
//! and line layouts. Everything is pure and synchronous; fetching, parsing
//! and drawing belong to the caller.

/// Core data types
pub mod types;

/// Error types
pub mod error;

/// Gapped sequence utilities
pub mod sequence;

/// Coordinate and frame normalization
pub mod coords;

/// Track ordering
pub mod layout;

/// Sequence map geometry
pub mod map;

/// Alignment statistics
pub mod stats;

/// Alignment line layout
pub mod blocks;

/// View state and handler registry
pub mod view;

// Re-export commonly used types
pub use types::*;
pub use error::{GeometryError, GeometryResult};
pub use sequence::{reverse, reverse_complement, strip_gaps, ungapped_len};
pub use coords::{
    normalize_feature, normalize_hsp, orf_fragment, orf_frame, NormalizedHsp, OrfClass, OrfFrame, OrientedSegment,
};
pub use layout::{layout_tracks, LayoutResult, LayoutRow, SortMode};
pub use map::{FragmentBox, MapGeometry, MapPlacement, MapStyle, RowPlacement, Tick};
pub use stats::{compute_alignment_stats, segment_label, AlignmentStats, AlignmentSummary};
pub use blocks::{multiple_blocks, pairwise_blocks, AlignmentBlock, BlockLine, MsaRow, MultipleBlock};
pub use view::{ViewAction, ViewError, ViewHandler, ViewInstance, ViewRegistry, ViewState};

/// Version information for the SeqView core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
