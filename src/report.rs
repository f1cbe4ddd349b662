//! Run report — the accumulated result of one mapping pass.

use crate::error::SkipReason;
use std::path::PathBuf;
use std::time::Duration;

/// Counters and outcome of a single mapping run.
///
/// All mutable run state lives here and is threaded through the pipeline
/// explicitly; there are no ambient counters.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Routes carrying the `Mappable` marker.
    pub mappable_routes: usize,
    /// Mappable routes whose URI template contains a placeholder.
    pub dynamic_routes: usize,
    /// Routes (or individual lookup hints) dropped before emission.
    pub removed_links: usize,
    /// `url` entries actually written to the sitemap.
    pub total_mapped: usize,
    /// Which route/hint was dropped and why, in pipeline order.
    pub skips: Vec<(String, SkipReason)>,
    /// Where the sitemap was written.
    pub output_path: PathBuf,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl RunReport {
    /// Record a dropped route or hint.
    pub fn skip(&mut self, uri: impl Into<String>, reason: SkipReason) {
        self.removed_links += 1;
        self.skips.push((uri.into(), reason));
    }
}
