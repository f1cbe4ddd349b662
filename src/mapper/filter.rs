//! Mappability filter — select routes opted into sitemap generation.

use crate::registry::RouteDescriptor;

/// Keep routes carrying the `Mappable` marker, preserving registry order.
pub fn mappable(routes: &[RouteDescriptor]) -> Vec<&RouteDescriptor> {
    routes.iter().filter(|r| r.is_mappable()).collect()
}
