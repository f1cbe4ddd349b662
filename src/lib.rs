//! Routemap — sitemap generation from a route registry.
//!
//! Routes opt in by carrying the `Mappable` middleware marker. Static routes
//! contribute one entry each; routes with a `{placeholder}` segment are
//! expanded to one entry per record of the domain entity their handler
//! enumerates, inferred by scanning the handler's source text for lookup
//! patterns — or supplied directly through an explicit resolver registry.
//!
//! The pipeline is a single synchronous pass:
//! registry → mappability filter → {static emitter | inspector → entity
//! resolver → expander} → assembler → persister.

pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod inspect;
pub mod mapper;
pub mod notify;
pub mod registry;
pub mod report;
pub mod sitemap;

pub use config::Config;
pub use entity::{EntityCatalog, EntityRecord, EntitySource};
pub use error::{MapError, SkipReason};
pub use mapper::resolvers::ResolverRegistry;
pub use mapper::Mapper;
pub use registry::{Action, RouteDescriptor, RouteRegistry};
pub use report::RunReport;
