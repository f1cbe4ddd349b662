//! Source inspector — infer which domain entity a dynamic route enumerates.
//!
//! Given a controller-action reference, loads the handler's source text,
//! narrows to the method's line span, scans it for data-lookup hints, and
//! resolves hinted entity names to fully-qualified types through the file's
//! import lines. All of it is text heuristics; every failure mode is a
//! per-route skip, never a run abort.

pub mod hints;
pub mod imports;
pub mod span;

use crate::error::SkipReason;
use crate::registry::RouteRegistry;
use hints::LookupHint;
use imports::ResolvedEntity;
use tracing::{debug, warn};

/// Outcome of inspecting one handler method.
#[derive(Debug)]
pub enum Inspection {
    /// The whole route is dropped for this reason.
    Skip(SkipReason),
    /// At least one entity-lookup hint was found. `resolved` holds one entry
    /// per hint that matched an import (duplicates preserved: records are
    /// enumerated once per hint occurrence); `unresolved` holds short names
    /// with no matching import, each a counted drop.
    Entities {
        resolved: Vec<ResolvedEntity>,
        unresolved: Vec<String>,
    },
}

/// Inspect `controller::method` using the registry's source-file table.
pub fn inspect(registry: &RouteRegistry, controller: &str, method: &str) -> Inspection {
    let Some(path) = registry.source_for(controller) else {
        return Inspection::Skip(SkipReason::NoSourceFile(controller.to_string()));
    };

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), %err, "could not read controller source");
            return Inspection::Skip(SkipReason::SourceUnavailable(
                path.display().to_string(),
            ));
        }
    };
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    let Some(method_span) = span::find_span(&lines, method) else {
        return Inspection::Skip(SkipReason::SpanNotFound(format!("{controller}@{method}")));
    };
    debug!(
        controller,
        method,
        start = method_span.start + 1,
        end = method_span.end + 1,
        "inspecting method span"
    );

    let found = hints::scan(&lines, method_span);
    if found.is_empty() {
        return Inspection::Skip(SkipReason::NoHints);
    }

    let lookups: Vec<&String> = found
        .iter()
        .filter_map(|h| match h {
            LookupHint::EntityLookup(line) => Some(line),
            LookupHint::Query(_) => None,
        })
        .collect();

    // Query hints alone do not name an enumerable entity; the route is
    // reported and dropped.
    if lookups.is_empty() {
        return Inspection::Skip(SkipReason::QueryHintsOnly(found.len()));
    }

    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();
    for line in lookups {
        let Some(name) = hints::entity_name(line) else {
            warn!(line = line.trim(), "could not extract entity name from hint");
            unresolved.push(line.trim().to_string());
            continue;
        };
        match imports::resolve(&lines, &name) {
            Some(entity) => resolved.push(entity),
            None => unresolved.push(name),
        }
    }

    Inspection::Entities {
        resolved,
        unresolved,
    }
}
