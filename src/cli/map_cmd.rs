//! `routemap map` — one full pass: registry → sitemap.xml.

use crate::cli::output::{self, Styled};
use crate::config::Config;
use crate::entity::json_source;
use crate::error::MapError;
use crate::mapper::Mapper;
use crate::registry::{manifest, RouteRegistry};
use crate::{notify, report::RunReport};
use anyhow::Result;
use std::path::Path;

/// Run the map command.
pub fn run(manifest_path: &Path, config_path: &Path, entities_dir: &Path) -> Result<()> {
    let s = Styled::new();

    if !output::is_quiet() && !output::is_json() {
        output::print_header(&s);
        eprintln!("  Searching for routes...");
    }

    let config = Config::load(config_path)?;
    let registry = manifest::load(manifest_path)?;
    let catalog = json_source::catalog_from_dir(entities_dir)?;

    let report = match Mapper::new(&config, &registry, &catalog).run() {
        Ok(report) => report,
        Err(MapError::NoMappableRoutes) => {
            if output::is_json() {
                output::print_json(&serde_json::json!({
                    "error": "no_mappable_routes",
                    "message": MapError::NoMappableRoutes.to_string(),
                }));
            } else {
                eprintln!();
                eprintln!("  {} {}", s.fail_sym(), MapError::NoMappableRoutes);
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if output::is_json() {
        print_report_json(&report);
    } else if !output::is_quiet() {
        print_route_table(&s, &registry);
        print_report(&s, &report);
    }

    if config.notifications {
        notify::send(
            "Routemap finished",
            &format!(
                "{} routes mapped in {:.2}s",
                report.total_mapped,
                report.elapsed.as_secs_f64()
            ),
        );
    }

    Ok(())
}

/// Print the eligible-route table, PHP-artisan style but aligned columns.
fn print_route_table(s: &Styled, registry: &RouteRegistry) {
    eprintln!();
    eprintln!("  {}", s.bold("Eligible routes"));
    for route in registry.routes().iter().filter(|r| r.is_mappable()) {
        let kind = if route.is_dynamic() {
            s.yellow("variable")
        } else {
            s.dim("standard")
        };
        eprintln!(
            "    {:<40} {:<10} {}",
            route.uri,
            route.methods.join(","),
            kind
        );
    }
}

/// Print the run summary.
fn print_report(s: &Styled, report: &RunReport) {
    eprintln!();
    output::print_row(
        s.ok_sym(),
        "Mappable routes:",
        &report.mappable_routes.to_string(),
    );
    if report.dynamic_routes > 0 {
        output::print_row(
            s.ok_sym(),
            "Dynamic routes:",
            &report.dynamic_routes.to_string(),
        );
    }
    if report.removed_links > 0 {
        output::print_row(
            s.warn_sym(),
            "Removed links:",
            &report.removed_links.to_string(),
        );
        if output::is_verbose() {
            for (uri, reason) in &report.skips {
                eprintln!("        {} {}", s.dim(uri), s.dim(&reason.to_string()));
            }
        }
    }
    output::print_row(
        s.ok_sym(),
        "Sitemap entries:",
        &report.total_mapped.to_string(),
    );
    output::print_row(
        s.ok_sym(),
        "Written to:",
        &report.output_path.display().to_string(),
    );
    eprintln!();
    eprintln!(
        "  {} Done in {:.2}s",
        s.green("\u{2713}"),
        report.elapsed.as_secs_f64()
    );
}

/// Print the run summary as JSON.
fn print_report_json(report: &RunReport) {
    let skips: Vec<_> = report
        .skips
        .iter()
        .map(|(uri, reason)| {
            serde_json::json!({ "uri": uri, "reason": reason.to_string() })
        })
        .collect();
    output::print_json(&serde_json::json!({
        "mappable_routes": report.mappable_routes,
        "dynamic_routes": report.dynamic_routes,
        "removed_links": report.removed_links,
        "total_mapped": report.total_mapped,
        "skips": skips,
        "output": report.output_path.display().to_string(),
        "duration_ms": report.elapsed.as_millis(),
    }));
}
