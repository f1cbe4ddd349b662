//! The mapping pipeline: registry → filter → emit → assemble → persist.
//!
//! One synchronous pass over the route table. Per-route failures are counted
//! and skipped; the only fatal conditions are an empty mappable set and a
//! failed write of the output artifact.

pub mod expand;
pub mod filter;
pub mod resolvers;

use crate::config::{Config, RESERVED_ROUTE_NAME};
use crate::entity::EntityCatalog;
use crate::error::{MapError, SkipReason};
use crate::inspect::{self, Inspection};
use crate::registry::{Action, RouteDescriptor, RouteRegistry};
use crate::report::RunReport;
use crate::sitemap::{writer, SitemapDocument, SitemapEntry};
use resolvers::ResolverRegistry;
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

/// One full sitemap-generation run over a route registry.
pub struct Mapper<'a> {
    config: &'a Config,
    registry: &'a RouteRegistry,
    catalog: &'a EntityCatalog,
    resolvers: Option<&'a ResolverRegistry>,
}

impl<'a> Mapper<'a> {
    pub fn new(config: &'a Config, registry: &'a RouteRegistry, catalog: &'a EntityCatalog) -> Self {
        Self {
            config,
            registry,
            catalog,
            resolvers: None,
        }
    }

    /// Attach explicit route resolvers; routes with a registered resolver
    /// skip source inspection entirely.
    pub fn with_resolvers(mut self, resolvers: &'a ResolverRegistry) -> Self {
        self.resolvers = Some(resolvers);
        self
    }

    /// Execute the pipeline and write the sitemap.
    pub fn run(&self) -> Result<RunReport, MapError> {
        let start = Instant::now();
        let base = Url::parse(&self.config.base_url).map_err(|source| MapError::BadBaseUrl {
            url: self.config.base_url.clone(),
            source,
        })?;

        let kept = filter::mappable(self.registry.routes());
        if kept.is_empty() {
            return Err(MapError::NoMappableRoutes);
        }

        let mut report = RunReport {
            mappable_routes: kept.len(),
            dynamic_routes: kept.iter().filter(|r| r.is_dynamic()).count(),
            ..RunReport::default()
        };
        info!(
            mappable = report.mappable_routes,
            dynamic = report.dynamic_routes,
            "eligible routes found"
        );

        let mut doc = SitemapDocument::new();
        for route in kept {
            self.map_route(route, &base, &mut doc, &mut report);
        }

        let output_path = self.config.sitemap_path();
        writer::persist(&doc, &output_path)?;

        report.total_mapped = doc.len();
        report.output_path = output_path;
        report.elapsed = start.elapsed();
        Ok(report)
    }

    /// Map one route into zero or more sitemap entries.
    fn map_route(
        &self,
        route: &RouteDescriptor,
        base: &Url,
        doc: &mut SitemapDocument,
        report: &mut RunReport,
    ) {
        if !self.config.method_allowed(&route.methods) {
            report.skip(route.uri.as_str(), SkipReason::MethodNotAllowed);
            return;
        }
        if route.name.as_deref() == Some(RESERVED_ROUTE_NAME) {
            report.skip(route.uri.as_str(), SkipReason::ReservedName);
            return;
        }

        if !route.is_dynamic() {
            self.emit(&route.uri, base, doc, report);
            return;
        }

        // Explicit resolver wins over any source-text heuristics.
        if let Some(resolver) = self.resolvers.and_then(|r| r.lookup(route)) {
            match resolver() {
                Ok(ids) => {
                    for id in ids {
                        self.emit(&expand::substitute(&route.uri, &id), base, doc, report);
                    }
                }
                Err(err) => {
                    warn!(uri = %route.uri, %err, "route resolver failed");
                    report.skip(route.uri.as_str(), SkipReason::EnumerationFailed(route.uri.clone()));
                }
            }
            return;
        }

        let (controller, method) = match &route.action {
            Action::Closure => {
                report.skip(route.uri.as_str(), SkipReason::ClosureAction);
                return;
            }
            Action::Handler { controller, method } => (controller, method),
        };
        info!(uri = %route.uri, handler = %format!("{controller}@{method}"), "found variable route");

        match inspect::inspect(self.registry, controller, method) {
            Inspection::Skip(reason) => {
                warn!(uri = %route.uri, %reason, "route dropped");
                report.skip(route.uri.as_str(), reason);
            }
            Inspection::Entities {
                resolved,
                unresolved,
            } => {
                for name in unresolved {
                    warn!(uri = %route.uri, entity = %name, "entity not found");
                    report.skip(route.uri.as_str(), SkipReason::EntityNotFound(name));
                }
                for entity in resolved {
                    self.expand_entity(route, &entity.qualified, base, doc, report);
                }
            }
        }
    }

    /// Enumerate one resolved entity and emit an entry per record.
    fn expand_entity(
        &self,
        route: &RouteDescriptor,
        qualified: &str,
        base: &Url,
        doc: &mut SitemapDocument,
        report: &mut RunReport,
    ) {
        let Some(source) = self.catalog.resolve(qualified) else {
            report.skip(route.uri.as_str(), SkipReason::NoRecordSource(qualified.to_string()));
            return;
        };
        let records = match source.all() {
            Ok(records) => records,
            Err(err) => {
                warn!(entity = qualified, %err, "record enumeration failed");
                report.skip(route.uri.as_str(), SkipReason::EnumerationFailed(qualified.to_string()));
                return;
            }
        };
        info!(uri = %route.uri, entity = qualified, records = records.len(), "expanding route");
        for record in records {
            self.emit(&expand::substitute(&route.uri, &record.id), base, doc, report);
        }
    }

    /// Resolve one concrete URI against the base URL and append it.
    fn emit(&self, uri: &str, base: &Url, doc: &mut SitemapDocument, report: &mut RunReport) {
        match expand::absolute_url(base, uri) {
            Ok(loc) => doc.push(SitemapEntry::new(loc)),
            Err(err) => {
                warn!(uri, %err, "could not resolve URL");
                report.skip(uri, SkipReason::UnresolvableUrl(uri.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::StaticSource;
    use crate::registry::MAPPABLE_MARKER;

    fn static_route(uri: &str) -> RouteDescriptor {
        RouteDescriptor {
            uri: uri.to_string(),
            name: None,
            methods: vec!["GET".to_string()],
            action: Action::Closure,
            middleware: vec![MAPPABLE_MARKER.to_string()],
        }
    }

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            base_url: "https://example.com/".to_string(),
            public_root: dir.join("public"),
            ..Config::default()
        }
    }

    #[test]
    fn test_empty_mappable_set_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut registry = RouteRegistry::new();
        registry.register(RouteDescriptor {
            middleware: vec![],
            ..static_route("/a")
        });
        let catalog = EntityCatalog::new();

        let err = Mapper::new(&config, &registry, &catalog).run().unwrap_err();
        assert!(matches!(err, MapError::NoMappableRoutes));
        // Fatal before writing: no output file.
        assert!(!config.sitemap_path().exists());
    }

    #[test]
    fn test_static_routes_emit_one_entry_each() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut registry = RouteRegistry::new();
        registry.register(static_route("/about"));
        registry.register(static_route("/contact"));
        let catalog = EntityCatalog::new();

        let report = Mapper::new(&config, &registry, &catalog).run().unwrap();
        assert_eq!(report.mappable_routes, 2);
        assert_eq!(report.total_mapped, 2);
        assert_eq!(report.removed_links, 0);
    }

    #[test]
    fn test_method_gate_and_reserved_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut registry = RouteRegistry::new();
        registry.register(RouteDescriptor {
            methods: vec!["POST".to_string()],
            ..static_route("/submit")
        });
        registry.register(RouteDescriptor {
            name: Some(RESERVED_ROUTE_NAME.to_string()),
            ..static_route("/sitemap.xml")
        });
        registry.register(static_route("/about"));
        let catalog = EntityCatalog::new();

        let report = Mapper::new(&config, &registry, &catalog).run().unwrap();
        assert_eq!(report.total_mapped, 1);
        assert_eq!(report.removed_links, 2);
        assert!(report
            .skips
            .iter()
            .any(|(_, r)| *r == SkipReason::MethodNotAllowed));
        assert!(report
            .skips
            .iter()
            .any(|(_, r)| *r == SkipReason::ReservedName));
    }

    #[test]
    fn test_dynamic_closure_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut registry = RouteRegistry::new();
        registry.register(static_route("/users/{id}"));
        let catalog = EntityCatalog::new();

        let report = Mapper::new(&config, &registry, &catalog).run().unwrap();
        assert_eq!(report.total_mapped, 0);
        assert_eq!(report.removed_links, 1);
        assert_eq!(report.skips[0].1, SkipReason::ClosureAction);
    }

    #[test]
    fn test_explicit_resolver_bypasses_inspection() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut registry = RouteRegistry::new();
        registry.register(RouteDescriptor {
            name: Some("posts.show".to_string()),
            // A closure action would otherwise be unresolvable.
            ..static_route("/posts/{slug}")
        });
        let catalog = EntityCatalog::new();
        let mut resolvers = ResolverRegistry::new();
        resolvers.register("posts.show", || {
            Ok(vec!["hello".to_string(), "world".to_string()])
        });

        let report = Mapper::new(&config, &registry, &catalog)
            .with_resolvers(&resolvers)
            .run()
            .unwrap();
        assert_eq!(report.total_mapped, 2);
        assert_eq!(report.removed_links, 0);

        let xml = std::fs::read_to_string(&report.output_path).unwrap();
        assert!(xml.contains("https://example.com/posts/hello"));
        assert!(xml.contains("https://example.com/posts/world"));
    }

    #[test]
    fn test_dynamic_route_without_record_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("user_controller.rs");
        std::fs::write(
            &source,
            "use crate::models::User;\n\
             pub fn show(id: u64) {\n\
                 let user = User::find(id);\n\
             }\n",
        )
        .unwrap();

        let config = config_in(dir.path());
        let mut registry = RouteRegistry::new();
        registry.register(RouteDescriptor {
            action: Action::parse("UserController@show"),
            ..static_route("/users/{id}")
        });
        registry.register_source("UserController", &source);
        let catalog = EntityCatalog::new();

        let report = Mapper::new(&config, &registry, &catalog).run().unwrap();
        assert_eq!(report.total_mapped, 0);
        assert!(matches!(report.skips[0].1, SkipReason::NoRecordSource(_)));
    }

    #[test]
    fn test_duplicate_hints_enumerate_once_per_hint() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("user_controller.rs");
        std::fs::write(
            &source,
            "use crate::models::User;\n\
             pub fn show(id: u64) {\n\
                 let a = User::find(id);\n\
                 let b = User::find(id);\n\
             }\n",
        )
        .unwrap();

        let config = config_in(dir.path());
        let mut registry = RouteRegistry::new();
        registry.register(RouteDescriptor {
            action: Action::parse("UserController@show"),
            ..static_route("/users/{id}")
        });
        registry.register_source("UserController", &source);
        let mut catalog = EntityCatalog::new();
        catalog.register("User", Box::new(StaticSource::new(["1", "2"])));

        let report = Mapper::new(&config, &registry, &catalog).run().unwrap();
        // Two hints, two records each: no cross-hint deduplication.
        assert_eq!(report.total_mapped, 4);
    }
}
