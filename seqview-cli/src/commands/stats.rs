use crate::error::CliResult;
use seqview_core::{compute_alignment_stats, AlignmentStats};

pub fn render_stats(stats: &AlignmentStats) -> String {
    format!(
        "Length:     {}\nIdentities: {}\nGaps:       {}\n",
        stats.length,
        stats.identities_label(),
        stats.gaps_label()
    )
}

pub fn execute(first: String, second: String, json: bool) -> CliResult<()> {
    let stats = compute_alignment_stats(&first, &second)?;
    log::debug!("Compared {} aligned columns", stats.length);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_stats(&stats));
    }

    Ok(())
}
