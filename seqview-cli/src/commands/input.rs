//! Loading of JSON hit files into tracks

use crate::error::{CliError, CliResult};
use seqview_core::{normalize_hsp, HspRecord, NormalizedHsp, OrfFrame, Position, Track};
use serde::Deserialize;
use std::path::Path;

fn default_query_name() -> String {
    "Query".to_string()
}

/// One database hit with its HSPs, as read from the input file
#[derive(Debug, Clone, Deserialize)]
pub struct HitSet {
    pub title: String,
    #[serde(default = "default_query_name")]
    pub query_name: String,
    #[serde(default)]
    pub hit_name: Option<String>,
    #[serde(default)]
    pub hsps: Vec<HspRecord>,
}

impl HitSet {
    pub fn hit_name(&self) -> &str {
        self.hit_name.as_deref().unwrap_or(&self.title)
    }
}

/// A hit whose HSPs have been normalized
#[derive(Debug, Clone)]
pub struct LoadedHit {
    pub title: String,
    pub hsps: Vec<NormalizedHsp>,
}

impl LoadedHit {
    /// Map track with one fragment per HSP, in HSP order
    pub fn track(&self) -> Track {
        self.track_for_orf(None)
    }

    /// Map track whose fragments are classed against an ORF's reading frame
    pub fn track_for_orf(&self, orf: Option<&OrfFrame>) -> Track {
        Track::new(self.title.clone()).with_features(
            self.hsps
                .iter()
                .enumerate()
                .map(|(i, hsp)| match orf {
                    Some(orf) => hsp.map_fragment_for_orf(i, orf),
                    None => hsp.map_fragment(i),
                })
                .collect(),
        )
    }
}

pub fn read_hit_sets(path: &Path) -> CliResult<Vec<HitSet>> {
    if !path.exists() {
        return Err(CliError::file_not_found(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let hits: Vec<HitSet> = serde_json::from_str(&content)?;
    log::debug!("Read {} hits from {}", hits.len(), path.display());

    Ok(hits)
}

pub fn normalize_hit_sets(sets: Vec<HitSet>) -> CliResult<Vec<LoadedHit>> {
    sets.into_iter()
        .map(|set| {
            let hsps = set
                .hsps
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    normalize_hsp(record, &set.query_name, set.hit_name()).map_err(|e| {
                        CliError::record(format!("'{}' HSP {}", set.title, i), e.to_string())
                    })
                })
                .collect::<CliResult<Vec<_>>>()?;
            Ok(LoadedHit { title: set.title, hsps })
        })
        .collect()
}

/// Read and normalize every hit in a JSON file
pub fn load_hits(path: &Path) -> CliResult<Vec<LoadedHit>> {
    let hits = normalize_hit_sets(read_hit_sets(path)?)?;
    let hsp_count: usize = hits.iter().map(|h| h.hsps.len()).sum();
    log::info!("Loaded {} hits with {} HSPs", hits.len(), hsp_count);
    Ok(hits)
}

/// Rightmost feature end over all tracks, used when no reference length is given
pub fn extent(tracks: &[Track]) -> Option<Position> {
    tracks.iter().flat_map(|t| t.features.iter().map(|f| f.end)).max()
}

/// Find a hit by exact title, falling back to a case-insensitive match
pub fn find_hit<'a>(hits: &'a [LoadedHit], title: &str) -> CliResult<&'a LoadedHit> {
    hits.iter()
        .find(|h| h.title == title)
        .or_else(|| hits.iter().find(|h| h.title.eq_ignore_ascii_case(title)))
        .ok_or_else(|| CliError::validation(format!("No hit titled '{}'", title)))
}
