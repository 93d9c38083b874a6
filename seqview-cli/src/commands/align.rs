//! Alignment panel command: summary header plus wrapped alignment lines

use super::input::{find_hit, load_hits};
use crate::config::Config;
use crate::error::{CliError, CliResult};
use seqview_core::{pairwise_blocks, AlignmentBlock, AlignmentSummary, NormalizedHsp};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Serialize)]
struct AlignmentReport<'a> {
    summary: &'a AlignmentSummary,
    blocks: &'a [AlignmentBlock],
}

fn render_blocks(hsp: &NormalizedHsp, blocks: &[AlignmentBlock]) -> String {
    let name_width = hsp.query.name.len().max(hsp.hit.name.len());
    let number_width = blocks
        .iter()
        .flat_map(|b| [b.query.start, b.hit.start])
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for block in blocks {
        out.push_str(&format!(
            "\n{:<nw$}  {:>pw$}  {}  {}\n",
            hsp.query.name,
            block.query.start,
            block.query.seq,
            block.query.end,
            nw = name_width,
            pw = number_width
        ));
        out.push_str(&format!("{:<w$}  {}\n", "", block.midline, w = name_width + number_width + 2));
        out.push_str(&format!(
            "{:<nw$}  {:>pw$}  {}  {}\n",
            hsp.hit.name,
            block.hit.start,
            block.hit.seq,
            block.hit.end,
            nw = name_width,
            pw = number_width
        ));
    }
    out
}

/// Render one HSP of one hit as the alignment panel text
pub fn render_alignment(hsp: &NormalizedHsp, line_length: usize) -> CliResult<String> {
    let summary = AlignmentSummary::from_hsp(hsp)?;
    let blocks = pairwise_blocks(hsp, line_length);
    Ok(format!("{}\n{}", summary, render_blocks(hsp, &blocks)))
}

pub fn execute(
    config: &Config,
    input: PathBuf,
    track: String,
    hsp: usize,
    line_length: Option<usize>,
    json: bool,
) -> CliResult<()> {
    let hits = load_hits(&input)?;
    let hit = find_hit(&hits, &track)?;
    let selected = hit.hsps.get(hsp).ok_or_else(|| {
        CliError::validation(format!("'{}' has {} HSPs, no HSP {}", hit.title, hit.hsps.len(), hsp))
    })?;

    let line_length = line_length.unwrap_or(config.alignment.line_length);
    log::info!("Aligning HSP {} of '{}' at {} columns per line", hsp, hit.title, line_length);

    if json {
        let summary = AlignmentSummary::from_hsp(selected)?;
        let blocks = pairwise_blocks(selected, line_length);
        let report = AlignmentReport {
            summary: &summary,
            blocks: &blocks,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_alignment(selected, line_length)?);
    }

    Ok(())
}
