use anyhow::Context;
use favicon_domain::{resolve_overlaps, TimelineCard};
use std::io::Read;
use tracing::info;

/// Reads cards from `path`, or stdin when `path` is `-`.
pub fn run_overlaps(path: &str) -> anyhow::Result<()> {
    let contents = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read cards from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?
    };

    let cards: Vec<TimelineCard> =
        serde_json::from_str(&contents).context("Cards must be a JSON array of {id, start, end}")?;
    let resolved = resolve_overlaps(&cards);

    info!(input = cards.len(), output = resolved.len(), "Overlaps resolved");
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}
