//! Classify source lines inside a method span into data-lookup hints.

use crate::inspect::span::SourceSpan;

/// Marker for a static find-by-identifier call, e.g. `User::find(id)`.
pub const FINDER_MARKER: &str = "::find";

/// Marker for generic query-builder access, e.g. `sqlx::query(...)`.
pub const QUERY_MARKER: &str = "query(";

/// One classified line of handler source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupHint {
    /// Line contains the static finder marker; carries the full line text.
    EntityLookup(String),
    /// Line contains the generic query marker. Informational only: a bare
    /// query does not name an enumerable entity, so no expansion is attempted
    /// from it.
    Query(String),
}

/// Scan the lines within `span` and classify each into at most one hint.
///
/// The finder marker is checked first, so a line containing both markers
/// counts as an entity lookup.
pub fn scan(lines: &[String], span: SourceSpan) -> Vec<LookupHint> {
    let end = span.end.min(lines.len().saturating_sub(1));
    let mut hints = Vec::new();
    for line in &lines[span.start..=end] {
        if line.contains(FINDER_MARKER) {
            hints.push(LookupHint::EntityLookup(line.clone()));
        } else if line.contains(QUERY_MARKER) {
            hints.push(LookupHint::Query(line.clone()));
        }
    }
    hints
}

/// Extract the candidate entity short name from an entity-lookup line.
///
/// Heuristic: take the text left of the finder marker and keep its last
/// space-separated token. `let user = User::find(id)` yields `User`.
pub fn entity_name(line: &str) -> Option<String> {
    let (left, _) = line.split_once(FINDER_MARKER)?;
    let token = left.split(' ').next_back()?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
