//! Explicit route resolvers — the declared alternative to source scanning.
//!
//! A route owner can register a callable that returns the identifier
//! sequence a dynamic route should be expanded with. When a resolver is
//! registered for a route, the source inspector is bypassed entirely for it.

use crate::registry::RouteDescriptor;
use anyhow::Result;
use std::collections::HashMap;

/// Returns the identifiers to substitute into a route's placeholder.
pub type ResolverFn = Box<dyn Fn() -> Result<Vec<String>>>;

/// Resolvers keyed by route name or URI template.
#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, ResolverFn>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver under a route's symbolic name or URI template.
    pub fn register<F>(&mut self, key: impl Into<String>, resolver: F)
    where
        F: Fn() -> Result<Vec<String>> + 'static,
    {
        self.resolvers.insert(key.into(), Box::new(resolver));
    }

    /// Find a resolver for a route, trying its name before its template.
    pub fn lookup(&self, route: &RouteDescriptor) -> Option<&ResolverFn> {
        if let Some(name) = &route.name {
            if let Some(resolver) = self.resolvers.get(name) {
                return Some(resolver);
            }
        }
        self.resolvers.get(&route.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Action;

    fn route(uri: &str, name: Option<&str>) -> RouteDescriptor {
        RouteDescriptor {
            uri: uri.to_string(),
            name: name.map(str::to_string),
            methods: vec!["GET".to_string()],
            action: Action::Closure,
            middleware: vec![],
        }
    }

    #[test]
    fn test_lookup_by_name_then_template() {
        let mut registry = ResolverRegistry::new();
        registry.register("users.show", || Ok(vec!["1".to_string()]));
        registry.register("/posts/{slug}", || Ok(vec!["hello".to_string()]));

        let by_name = route("/users/{id}", Some("users.show"));
        let ids = registry.lookup(&by_name).unwrap()().unwrap();
        assert_eq!(ids, vec!["1"]);

        let by_template = route("/posts/{slug}", None);
        let ids = registry.lookup(&by_template).unwrap()().unwrap();
        assert_eq!(ids, vec!["hello"]);

        assert!(registry.lookup(&route("/other", None)).is_none());
    }
}
