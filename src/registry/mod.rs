//! Route registry — an immutable snapshot of the application's route table.
//!
//! The live framework router is an external collaborator; hosts either build
//! the registry in code or export it as a JSON manifest (see [`manifest`]).

pub mod manifest;

use std::collections::HashMap;
use std::path::PathBuf;

/// The middleware marker that opts a route into sitemap generation.
pub const MAPPABLE_MARKER: &str = "Mappable";

/// What a route dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An anonymous closure. Opaque: there is no named source to inspect.
    Closure,
    /// A controller method, addressable as `Controller@method`.
    Handler { controller: String, method: String },
}

impl Action {
    /// Parse the `Controller@method` string form used by route manifests.
    /// Anything without an `@` separator (conventionally `Closure`) is
    /// treated as a closure.
    pub fn parse(s: &str) -> Self {
        match s.split_once('@') {
            Some((controller, method)) if !controller.is_empty() && !method.is_empty() => {
                Action::Handler {
                    controller: controller.to_string(),
                    method: method.to_string(),
                }
            }
            _ => Action::Closure,
        }
    }
}

/// One route as registered with the application.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// URI template; may contain `{name}` placeholder segments.
    pub uri: String,
    /// Symbolic route name, unique when present.
    pub name: Option<String>,
    /// HTTP methods the route answers to, in registration order.
    pub methods: Vec<String>,
    /// The bound action.
    pub action: Action,
    /// Middleware tags attached to the route.
    pub middleware: Vec<String>,
}

impl RouteDescriptor {
    /// Whether the route carries the `Mappable` marker.
    pub fn is_mappable(&self) -> bool {
        self.middleware.iter().any(|m| m == MAPPABLE_MARKER)
    }

    /// Whether the URI template contains a placeholder segment.
    pub fn is_dynamic(&self) -> bool {
        self.uri.contains('{')
    }
}

/// Ordered route table plus the controller-to-source-file table.
///
/// Source locations are declared explicitly alongside the routes instead of
/// recovered through runtime reflection; the inspector only ever sees a file
/// path it was handed here.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteDescriptor>,
    sources: HashMap<String, PathBuf>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Registration order is preserved and is the order
    /// entries appear in the sitemap.
    pub fn register(&mut self, route: RouteDescriptor) -> &mut Self {
        self.routes.push(route);
        self
    }

    /// Declare the source file a controller's methods are defined in.
    pub fn register_source(&mut self, controller: impl Into<String>, path: impl Into<PathBuf>) {
        self.sources.insert(controller.into(), path.into());
    }

    /// All routes, in registration order.
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Source file for a controller, if one was declared.
    pub fn source_for(&self, controller: &str) -> Option<&PathBuf> {
        self.sources.get(controller)
    }
}
