//! Error types for the mapping pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a mapping run.
///
/// Everything else that goes wrong is resolved at the route level: the route
/// is dropped, the skip is counted, and the run continues.
#[derive(Debug, Error)]
pub enum MapError {
    /// No route in the registry carries the `Mappable` middleware marker.
    /// This is the only pre-write fatal condition; no sitemap is produced.
    #[error("no mappable routes found; tag routes with the `Mappable` middleware and try again")]
    NoMappableRoutes,

    /// The route manifest could not be read or parsed.
    #[error("failed to load route manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configured base URL does not parse; no `loc` can be resolved.
    #[error("invalid base_url {url:?}: {source}")]
    BadBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The assembled sitemap could not be written to the public root.
    #[error("failed to write sitemap to {}: {source}", path.display())]
    WriteSitemap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a route (or one of its lookup hints) was dropped from the sitemap.
///
/// Skips are recoverable by definition: they are logged, tallied into the
/// run report's removed-links count, and the pipeline moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// None of the route's HTTP methods intersect the configured allow-set.
    MethodNotAllowed,
    /// The route's symbolic name is the reserved sitemap-serving route name.
    ReservedName,
    /// The action is a closure; there is no source to inspect.
    ClosureAction,
    /// No source file is registered for the handler's controller.
    NoSourceFile(String),
    /// The controller's source file could not be read.
    SourceUnavailable(String),
    /// The method declaration was not found in the controller's source.
    SpanNotFound(String),
    /// The method span contained neither entity-lookup nor query hints.
    NoHints,
    /// Only generic query hints were found; no enumerable entity to expand.
    QueryHintsOnly(usize),
    /// An entity-lookup hint named an entity with no matching import line.
    EntityNotFound(String),
    /// The entity resolved to a type with no registered record source.
    NoRecordSource(String),
    /// The record source failed while enumerating.
    EnumerationFailed(String),
    /// The concrete URL could not be resolved against the base URL.
    UnresolvableUrl(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MethodNotAllowed => write!(f, "no allowed HTTP method"),
            SkipReason::ReservedName => write!(f, "reserved sitemap route"),
            SkipReason::ClosureAction => write!(f, "closure action cannot be inspected"),
            SkipReason::NoSourceFile(c) => write!(f, "no source file registered for {c}"),
            SkipReason::SourceUnavailable(p) => write!(f, "could not read source file {p}"),
            SkipReason::SpanNotFound(m) => write!(f, "method {m} not found in source"),
            SkipReason::NoHints => write!(f, "no resolvable entity"),
            SkipReason::QueryHintsOnly(n) => {
                write!(f, "{n} query hint(s) found but no entity lookup")
            }
            SkipReason::EntityNotFound(name) => write!(f, "entity {name} not found"),
            SkipReason::NoRecordSource(name) => {
                write!(f, "no record source registered for {name}")
            }
            SkipReason::EnumerationFailed(name) => {
                write!(f, "failed to enumerate records for {name}")
            }
            SkipReason::UnresolvableUrl(uri) => {
                write!(f, "could not resolve {uri} against the base URL")
            }
        }
    }
}
