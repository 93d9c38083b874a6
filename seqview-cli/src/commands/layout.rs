//! Map layout command: order hit tracks and place their fragments

use super::input::{extent, load_hits};
use crate::config::Config;
use crate::error::{CliError, CliResult};
use seqview_core::{layout_tracks, orf_frame, MapGeometry, MapPlacement, Position, SortMode, Track};
use std::path::{Path, PathBuf};

/// Build the map placement for a hit file
pub fn build_placement(
    config: &Config,
    input: &Path,
    sort: Option<SortMode>,
    pin: Option<usize>,
    length: Option<Position>,
    orf_start: Option<Position>,
) -> CliResult<MapPlacement> {
    let hits = load_hits(input)?;
    let orf = orf_start.map(orf_frame).transpose()?;
    if let Some(orf) = &orf {
        log::info!("Classing fragments against ORF {}", orf.title());
    }
    let tracks: Vec<Track> = hits.iter().map(|hit| hit.track_for_orf(orf.as_ref())).collect();

    let length = match length.or_else(|| extent(&tracks)) {
        Some(length) => length,
        None => return Err(CliError::validation("No features to place and no --length given")),
    };

    let sort = sort.unwrap_or(config.layout.sort);
    let pin = pin.or(config.layout.pin);
    log::info!("Laying out {} tracks ({:?}, pin {:?}) over {} positions", tracks.len(), sort, pin, length);

    let layout = layout_tracks(tracks, sort, pin);
    let geometry = MapGeometry::new(length, config.map.to_map_style())?;
    Ok(geometry.place(&layout))
}

pub fn render_text(placement: &MapPlacement) -> String {
    let mut out = String::new();

    let ticks: Vec<String> = placement
        .ticks
        .iter()
        .map(|t| format!("{}@{:.1}%", t.label, t.left_pct))
        .collect();
    out.push_str(&format!("Length: {}\n", placement.length));
    out.push_str(&format!("Ticks:  {}\n", ticks.join(" ")));

    for row in &placement.rows {
        out.push_str(&format!("\n[{}] {} (height {}px)\n", row.row, row.title, row.outline_height_px));
        for fragment in &row.fragments {
            out.push_str(&format!(
                "    {:>7.2}% +{:<7.2}% top {:>3}px  {}\n",
                fragment.left_pct, fragment.width_pct, fragment.margin_top_px, fragment.orientation
            ));
        }
    }

    out
}

pub fn execute(
    config: &Config,
    input: PathBuf,
    sort: Option<SortMode>,
    pin: Option<usize>,
    length: Option<Position>,
    orf_start: Option<Position>,
    json: bool,
) -> CliResult<()> {
    let placement = build_placement(config, &input, sort, pin, length, orf_start)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&placement)?);
    } else {
        print!("{}", render_text(&placement));
    }

    Ok(())
}
