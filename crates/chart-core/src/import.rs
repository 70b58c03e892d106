// File: crates/chart-core/src/import.rs
// Summary: Readers for supplied observation files (CSV with date,rate,volume headers, or a JSON array).

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::observation::Observation;

/// Load observations, choosing the reader by file extension.
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let data = match ext.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?)?,
        "json" => read_json(std::fs::File::open(path)?)?,
        _ => return Err(ChartError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!(path = %path.display(), len = data.len(), "loaded observations");
    Ok(data)
}

/// CSV with a header row naming `date`, `rate` and `volume` (any column order).
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut out = Vec::new();
    for rec in rdr.deserialize::<Observation>() {
        out.push(rec?);
    }
    Ok(out)
}

/// JSON array of `{ "date", "rate", "volume" }` objects.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Observation>> {
    Ok(serde_json::from_reader(reader)?)
}
