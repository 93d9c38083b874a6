//! Ordering of tracks on a multi-row sequence map

use crate::types::Track;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Keep input order
    #[default]
    None,
    /// Case-insensitive title order
    ByName,
    /// Ascending leftmost feature start
    ByLeftmostStart,
    /// Descending longest feature
    ByLongestFeature,
}

/// A track placed on a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRow {
    pub row: usize,
    pub pinned: bool,
    pub track: Track,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    pub rows: Vec<LayoutRow>,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.track.title.as_str()).collect()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.rows.iter().map(|r| &r.track)
    }
}

/// Order tracks for display and assign row indices.
///
/// All sorts are stable. A pinned track is taken out before sorting and put on
/// row 0; a pin outside the track list is ignored.
pub fn layout_tracks(mut tracks: Vec<Track>, sort_mode: SortMode, pinned_index: Option<usize>) -> LayoutResult {
    let pinned = match pinned_index {
        Some(index) if index < tracks.len() => Some(tracks.remove(index)),
        Some(index) => {
            log::debug!("Ignoring pin {} outside {} tracks", index, tracks.len());
            None
        }
        None => None,
    };

    sort_tracks(&mut tracks, sort_mode);

    let ordered = pinned
        .into_iter()
        .map(|t| (true, t))
        .chain(tracks.into_iter().map(|t| (false, t)));
    let rows = ordered
        .enumerate()
        .map(|(row, (pinned, track))| LayoutRow { row, pinned, track })
        .collect();

    LayoutResult { rows }
}

fn sort_tracks(tracks: &mut [Track], sort_mode: SortMode) {
    match sort_mode {
        SortMode::None => {}
        SortMode::ByName => tracks.sort_by_cached_key(|t| t.title.to_lowercase()),
        // Tracks without features go last
        SortMode::ByLeftmostStart => tracks.sort_by_key(|t| (t.leftmost_start().is_none(), t.leftmost_start())),
        SortMode::ByLongestFeature => tracks.sort_by_key(|t| Reverse(t.longest_span())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NormalizedFeature, Orientation};

    fn track(title: &str, spans: &[(i64, i64)]) -> Track {
        Track::new(title).with_features(
            spans
                .iter()
                .map(|&(s, e)| NormalizedFeature::new(s, e, Orientation::Forward))
                .collect(),
        )
    }

    fn sample() -> Vec<Track> {
        vec![
            track("delta", &[(50, 60)]),
            track("Alpha", &[(10, 100)]),
            track("charlie", &[(5, 10), (200, 210)]),
            track("bravo", &[(30, 35)]),
        ]
    }

    #[test]
    fn test_no_sort_keeps_order() {
        let layout = layout_tracks(sample(), SortMode::None, None);
        assert_eq!(layout.titles(), vec!["delta", "Alpha", "charlie", "bravo"]);
        let rows: Vec<usize> = layout.rows.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let layout = layout_tracks(sample(), SortMode::ByName, None);
        assert_eq!(layout.titles(), vec!["Alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_sort_by_name_is_stable() {
        let tracks = vec![
            track("same", &[(1, 2)]),
            track("other", &[(1, 2)]),
            track("Same", &[(3, 4)]),
        ];
        let layout = layout_tracks(tracks, SortMode::ByName, None);
        assert_eq!(layout.titles(), vec!["other", "same", "Same"]);
    }

    #[test]
    fn test_sort_by_leftmost() {
        let layout = layout_tracks(sample(), SortMode::ByLeftmostStart, None);
        assert_eq!(layout.titles(), vec!["charlie", "Alpha", "bravo", "delta"]);
    }

    #[test]
    fn test_sort_by_leftmost_is_stable() {
        let tracks = vec![
            track("late", &[(90, 95)]),
            track("first tie", &[(20, 30), (500, 900)]),
            Track::new("empty one"),
            track("second tie", &[(40, 41), (20, 22)]),
            Track::new("empty two"),
        ];
        let layout = layout_tracks(tracks, SortMode::ByLeftmostStart, None);
        assert_eq!(
            layout.titles(),
            vec!["first tie", "second tie", "late", "empty one", "empty two"]
        );
    }

    #[test]
    fn test_sort_by_leftmost_puts_empty_last() {
        let tracks = vec![Track::new("empty"), track("a", &[(400, 500)])];
        let layout = layout_tracks(tracks, SortMode::ByLeftmostStart, None);
        assert_eq!(layout.titles(), vec!["a", "empty"]);
    }

    #[test]
    fn test_sort_by_longest_descending_and_stable() {
        let tracks = vec![
            track("short", &[(1, 5)]),
            track("long-first", &[(1, 50)]),
            track("long-second", &[(100, 149)]),
        ];
        let layout = layout_tracks(tracks, SortMode::ByLongestFeature, None);
        assert_eq!(layout.titles(), vec!["long-first", "long-second", "short"]);
    }

    #[test]
    fn test_pinned_track_goes_first() {
        let layout = layout_tracks(sample(), SortMode::ByName, Some(0));
        assert_eq!(layout.titles(), vec!["delta", "Alpha", "bravo", "charlie"]);
        assert!(layout.rows[0].pinned);
        assert!(layout.rows[1..].iter().all(|r| !r.pinned));
    }

    #[test]
    fn test_out_of_range_pin_is_ignored() {
        let layout = layout_tracks(sample(), SortMode::None, Some(10));
        assert_eq!(layout.titles(), vec!["delta", "Alpha", "charlie", "bravo"]);
        assert!(layout.rows.iter().all(|r| !r.pinned));
    }

    #[test]
    fn test_empty_input() {
        let layout = layout_tracks(Vec::new(), SortMode::ByLongestFeature, Some(0));
        assert!(layout.is_empty());
    }
}
