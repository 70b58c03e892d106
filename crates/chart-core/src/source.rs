// File: crates/chart-core/src/source.rs
// Summary: Chooses the sequence bound to the chart: supplied data or a synthetic walk.

use serde::Deserialize;
use tracing::{info, warn};

use crate::observation::{check_sequence, Observation};
use crate::synthetic::{generate_with, GeneratorParams, RandomSource};

/// How supplied data relates to what gets bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourcePolicy {
    /// Bind supplied data when present, otherwise generate.
    #[default]
    PreferSupplied,
    /// Always bind a synthetic walk. Supplied data is only staged for display
    /// state; this is the historical demo behavior.
    AlwaysSynthetic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Supplied,
    Synthetic,
}

/// Outcome of source selection for one mount.
#[derive(Clone, Debug)]
pub struct Selection {
    /// Sequence handed to every data-consuming series.
    pub bound: Vec<Observation>,
    /// Supplied data retained without being bound (`AlwaysSynthetic` only).
    pub staged: Option<Vec<Observation>>,
    pub origin: Origin,
}

/// Decide the bound sequence once, before binding.
///
/// Only `None` requests synthesis; an empty supplied sequence is still supplied.
pub fn select(
    supplied: Option<Vec<Observation>>,
    policy: SourcePolicy,
    rng: &mut dyn RandomSource,
    params: &GeneratorParams,
) -> Selection {
    match (policy, supplied) {
        (SourcePolicy::PreferSupplied, Some(data)) => {
            let report = check_sequence(&data);
            if let Some(i) = report.first_unordered {
                warn!(index = i, len = report.len, "supplied sequence is not strictly ascending by date");
            }
            info!(len = data.len(), "binding supplied sequence");
            Selection { bound: data, staged: None, origin: Origin::Supplied }
        }
        (SourcePolicy::AlwaysSynthetic, Some(data)) => {
            let bound = generate_with(rng, params);
            info!(staged = data.len(), bound = bound.len(), "supplied sequence staged; binding synthetic walk");
            Selection { bound, staged: Some(data), origin: Origin::Synthetic }
        }
        (_, None) => {
            let bound = generate_with(rng, params);
            info!(len = bound.len(), "no supplied sequence; binding synthetic walk");
            Selection { bound, staged: None, origin: Origin::Synthetic }
        }
    }
}
