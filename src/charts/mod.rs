//! Chart resolvers: pure functions from (dataset, selector state) to chart data.
//!
//! Neither resolver keeps state between calls; the UI calls them again
//! whenever the dropdown or the payload range changes.

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub mod pie;
pub mod scatter;

pub use pie::{resolve_pie, PieChart};
pub use scatter::{resolve_scatter, ScatterChart};

/// Both chart panels as written by File → Export charts….
#[derive(Debug, Serialize)]
pub struct ChartExport<'a> {
    pub site: &'a str,
    pub payload_range: [f64; 2],
    pub pie: Option<&'a PieChart>,
    pub scatter: Option<&'a ScatterChart>,
}

/// Write the current charts as pretty-printed JSON.
pub fn export_charts(path: &Path, export: &ChartExport<'_>) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, export).context("writing chart JSON")?;
    writer.flush().context("flushing chart JSON")?;
    log::info!("Exported charts to {}", path.display());
    Ok(())
}
