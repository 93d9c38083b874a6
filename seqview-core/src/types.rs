use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based sequence coordinate. Signed because raw reverse-strand inputs may
/// be supplied relative to the far end of a sequence.
pub type Position = i64;

/// Gap character used in aligned sequences
pub const GAP: u8 = b'-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Fragment has no direction (plain interval)
    #[default]
    None,
    Forward,
    Reverse,
    /// Fragment points to both sides
    Both,
}

impl Orientation {
    /// Display orientation implied by a signed frame. Frame 0 is forward.
    pub fn from_frame(frame: i32) -> Self {
        if frame >= 0 {
            Orientation::Forward
        } else {
            Orientation::Reverse
        }
    }

    /// Swap forward and reverse; undirected orientations are unchanged.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Reverse,
            Orientation::Reverse => Orientation::Forward,
            other => other,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::None => write!(f, "none"),
            Orientation::Forward => write!(f, "forward"),
            Orientation::Reverse => write!(f, "reverse"),
            Orientation::Both => write!(f, "both"),
        }
    }
}

/// Search algorithm that produced an HSP. Determines how many nucleotides one
/// aligned residue spans on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Algorithm {
    #[default]
    Blastn,
    Blastp,
    Blastx,
    Tblastn,
    Tblastx,
}

impl Algorithm {
    /// Parse an algorithm name. Unknown names fall back to nucleotide steps.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "blastn" => Algorithm::Blastn,
            "blastp" => Algorithm::Blastp,
            "blastx" => Algorithm::Blastx,
            "tblastn" => Algorithm::Tblastn,
            "tblastx" => Algorithm::Tblastx,
            other => {
                log::warn!("Unknown alignment algorithm '{}', using nucleotide steps", other);
                Algorithm::Blastn
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Blastn => "blastn",
            Algorithm::Blastp => "blastp",
            Algorithm::Blastx => "blastx",
            Algorithm::Tblastn => "tblastn",
            Algorithm::Tblastx => "tblastx",
        }
    }

    /// Coordinate step on the query axis
    pub fn query_step(&self) -> u32 {
        match self {
            Algorithm::Blastx | Algorithm::Tblastx => 3,
            _ => 1,
        }
    }

    /// Coordinate step on the hit axis
    pub fn hit_step(&self) -> u32 {
        match self {
            Algorithm::Tblastn | Algorithm::Tblastx => 3,
            _ => 1,
        }
    }

    /// Only blastn compares nucleotides on both axes; everything else is
    /// reported with frames instead of strands.
    pub fn is_nucleotide(&self) -> bool {
        matches!(self, Algorithm::Blastn)
    }
}

impl From<String> for Algorithm {
    fn from(name: String) -> Self {
        Algorithm::from_name(&name)
    }
}

impl From<Algorithm> for String {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.name().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One side of an HSP as reported by the search backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedSegment {
    pub start: Position,
    /// Reported end; informational only, the normalized end is derived from
    /// `start`, `frame` and the ungapped sequence length.
    #[serde(default)]
    pub end: Option<Position>,
    #[serde(default)]
    pub frame: i32,
    /// Gapped aligned sequence
    pub seq: String,
}

impl AlignedSegment {
    pub fn new(start: Position, frame: i32, seq: impl Into<String>) -> Self {
        Self {
            start,
            end: None,
            frame,
            seq: seq.into(),
        }
    }
}

/// High-scoring pair: one local alignment between a query and a hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HspRecord {
    pub query: AlignedSegment,
    pub hit: AlignedSegment,
    #[serde(default)]
    pub midline: String,
    /// Bit score
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub evalue: f64,
    #[serde(default)]
    pub algorithm: Algorithm,
}

impl HspRecord {
    pub fn new(query: AlignedSegment, hit: AlignedSegment, midline: impl Into<String>) -> Self {
        Self {
            query,
            hit,
            midline: midline.into(),
            score: 0.0,
            evalue: 0.0,
            algorithm: Algorithm::Blastn,
        }
    }

    pub fn with_scores(mut self, score: f64, evalue: f64) -> Self {
        self.score = score;
        self.evalue = evalue;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Tooltip text shown for the fragment drawn from this HSP
    pub fn tooltip(&self) -> String {
        format!("Bitscore: {} E-value: {}", self.score, self.evalue)
    }
}

/// Data carried along with a feature for the renderer. Never interpreted by
/// the geometry code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeaturePayload {
    pub score: Option<f64>,
    pub evalue: Option<f64>,
    pub tooltip: Option<String>,
    pub text: Option<String>,
    pub class_name: Option<String>,
    /// Index of the HSP this feature was drawn from, used by the owning view
    /// to resolve clicks.
    pub hsp_index: Option<usize>,
}

/// Feature on the forward-strand coordinate system with `start <= end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFeature {
    pub start: Position,
    pub end: Position,
    pub orientation: Orientation,
    #[serde(default)]
    pub payload: FeaturePayload,
}

impl NormalizedFeature {
    /// Build a feature from two endpoints in either order.
    pub fn new(a: Position, b: Position, orientation: Orientation) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
            orientation,
            payload: FeaturePayload::default(),
        }
    }

    pub fn with_payload(mut self, payload: FeaturePayload) -> Self {
        self.payload = payload;
        self
    }

    /// Inclusive length in sequence positions
    pub fn length(&self) -> Position {
        self.end - self.start + 1
    }

    /// Extent used for longest-feature ordering
    pub fn span(&self) -> Position {
        self.end - self.start
    }
}

/// One row of a sequence map: a named collection of features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    #[serde(default)]
    pub class_name: Option<String>,
    pub features: Vec<NormalizedFeature>,
}

impl Track {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            class_name: None,
            features: Vec::new(),
        }
    }

    pub fn with_features(mut self, features: Vec<NormalizedFeature>) -> Self {
        self.features = features;
        self
    }

    pub fn add_feature(&mut self, feature: NormalizedFeature) {
        self.features.push(feature);
    }

    pub fn leftmost_start(&self) -> Option<Position> {
        self.features.iter().map(|f| f.start).min()
    }

    pub fn longest_span(&self) -> Position {
        self.features.iter().map(|f| f.span()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
