//! JSON route manifest — the interface boundary to the host application's
//! router.
//!
//! ```json
//! {
//!   "routes": [
//!     { "uri": "/about", "methods": ["GET"], "middleware": ["Mappable"] },
//!     { "uri": "/users/{id}", "name": "users.show", "methods": ["GET"],
//!       "action": "UserController@show", "middleware": ["Mappable"] }
//!   ],
//!   "controllers": { "UserController": "app/controllers/user.rs" }
//! }
//! ```

use crate::error::MapError;
use crate::registry::{Action, RouteDescriptor, RouteRegistry};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    routes: Vec<ManifestRoute>,
    #[serde(default)]
    controllers: HashMap<String, PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ManifestRoute {
    uri: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    methods: Vec<String>,
    /// `Controller@method` string form; absent or `Closure` means a closure.
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    middleware: Vec<String>,
}

/// Load a route registry from a JSON manifest file.
///
/// Controller source paths in the manifest are resolved relative to the
/// manifest's own directory, so an exported manifest stays portable.
pub fn load(path: &Path) -> Result<RouteRegistry, MapError> {
    let manifest = read_manifest(path).map_err(|source| MapError::Manifest {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let mut registry = RouteRegistry::new();

    for route in manifest.routes {
        registry.register(RouteDescriptor {
            uri: route.uri,
            name: route.name,
            methods: route.methods,
            action: route.action.as_deref().map(Action::parse).unwrap_or(Action::Closure),
            middleware: route.middleware,
        });
    }

    for (controller, source) in manifest.controllers {
        let resolved = if source.is_absolute() {
            source
        } else {
            base.join(source)
        };
        registry.register_source(controller, resolved);
    }

    Ok(registry)
}

fn read_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
