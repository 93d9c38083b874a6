//! Sequence map geometry: horizontal placement as percentages of the
//! reference length, vertical stacking in pixels.

use crate::error::{GeometryError, GeometryResult};
use crate::layout::LayoutResult;
use crate::types::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FRAGMENT_HEIGHT: u32 = 5;
pub const DEFAULT_FRAGMENT_MARGIN: u32 = 2;
pub const DEFAULT_MAP_MARGIN: u32 = 3;
pub const DEFAULT_TICKS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStyle {
    pub fragment_height: u32,
    pub fragment_margin: u32,
    pub map_margin: u32,
    pub n_ticks: u32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            fragment_height: DEFAULT_FRAGMENT_HEIGHT,
            fragment_margin: DEFAULT_FRAGMENT_MARGIN,
            map_margin: DEFAULT_MAP_MARGIN,
            n_ticks: DEFAULT_TICKS,
        }
    }
}

impl MapStyle {
    /// Vertical pitch of one stacked fragment
    fn pitch(&self) -> u32 {
        self.fragment_height.saturating_add(self.fragment_margin.saturating_mul(2))
    }

    /// Pitch and outline padding, or `None` when they do not fit in a `u32`
    fn checked_extents(&self) -> Option<(u32, u32)> {
        let pitch = self.fragment_margin.checked_mul(2)?.checked_add(self.fragment_height)?;
        let padding = self.map_margin.checked_mul(2)?;
        Some((pitch, padding))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragmentBox {
    pub left_pct: f64,
    pub width_pct: f64,
    pub margin_top_px: u32,
    pub orientation: Orientation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub left_pct: f64,
    pub label: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowPlacement {
    pub row: usize,
    pub title: String,
    pub outline_height_px: u32,
    pub fragments: Vec<FragmentBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPlacement {
    pub length: Position,
    pub ticks: Vec<Tick>,
    pub rows: Vec<RowPlacement>,
}

fn stacked_px(count: usize, pitch: u32) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX).saturating_mul(pitch)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapGeometry {
    length: Position,
    style: MapStyle,
}

impl MapGeometry {
    /// Geometry for a reference of `length` positions
    pub fn new(length: Position, style: MapStyle) -> GeometryResult<Self> {
        if length <= 0 {
            return Err(GeometryError::invalid_input(format!(
                "map length must be positive, got {}",
                length
            )));
        }
        if style.checked_extents().is_none() {
            return Err(GeometryError::invalid_input(format!(
                "map style sizes overflow: {:?}",
                style
            )));
        }
        Ok(Self { length, style })
    }

    pub fn length(&self) -> Position {
        self.length
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    /// Box for the `stack_index`-th fragment of a row. Fragments simply stack
    /// top to bottom; overlaps are not repacked. Pixel offsets saturate at
    /// `u32::MAX`.
    pub fn fragment_box(&self, feature: &NormalizedFeature, stack_index: usize) -> FragmentBox {
        let length = self.length as f64;
        FragmentBox {
            left_pct: (feature.start as f64 - 1.0) / length * 100.0,
            width_pct: (feature.end as f64 - feature.start as f64 + 1.0) / length * 100.0,
            margin_top_px: self
                .style
                .map_margin
                .saturating_add(stacked_px(stack_index, self.style.pitch()))
                .saturating_add(self.style.fragment_margin),
            orientation: feature.orientation,
        }
    }

    /// Height of a row holding `n_fragments` stacked fragments
    pub fn outline_height(&self, n_fragments: usize) -> u32 {
        self.style
            .map_margin
            .saturating_mul(2)
            .saturating_add(stacked_px(n_fragments, self.style.pitch()))
    }

    pub fn ticks(&self) -> Vec<Tick> {
        let n = self.style.n_ticks;
        if n == 0 {
            return vec![Tick { left_pct: 0.0, label: 1 }];
        }
        (0..=n)
            .map(|j| {
                let label = (j as f64 * (self.length as f64 / n as f64) + 1.0).round() as Position;
                Tick {
                    left_pct: 100.0 * j as f64 / n as f64,
                    label: label.min(self.length),
                }
            })
            .collect()
    }

    /// Place every row of a layout
    pub fn place(&self, layout: &LayoutResult) -> MapPlacement {
        let rows = layout
            .rows
            .iter()
            .map(|row| RowPlacement {
                row: row.row,
                title: row.track.title.clone(),
                outline_height_px: self.outline_height(row.track.features.len()),
                fragments: row
                    .track
                    .features
                    .iter()
                    .enumerate()
                    .map(|(i, f)| self.fragment_box(f, i))
                    .collect(),
            })
            .collect();

        MapPlacement {
            length: self.length,
            ticks: self.ticks(),
            rows,
        }
    }
}
