//! Resolve an entity short name to its fully-qualified type via import lines.

/// Path segment that marks the conventional home of domain entities.
const ENTITY_PATH_SEGMENT: &str = "models";

/// A fully-qualified type name recovered from an import line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    /// Full path, e.g. `crate::models::User`.
    pub qualified: String,
    /// Bare type name, e.g. `User`.
    pub short: String,
}

impl ResolvedEntity {
    pub fn new(qualified: String) -> Self {
        let short = qualified
            .rsplit("::")
            .next()
            .unwrap_or(qualified.as_str())
            .to_string();
        Self { qualified, short }
    }
}

/// Scan the whole file for a `use` line importing `short_name`.
///
/// Lines under a `models` path are preferred over other imports of the same
/// name. Within each tier the *last* matching line wins: later declarations
/// override earlier ones under this scan order. That tie-break mirrors file
/// order, not namespace precedence, and is a documented heuristic rather than
/// a correctness guarantee.
pub fn resolve(lines: &[String], short_name: &str) -> Option<ResolvedEntity> {
    let mut last_any: Option<String> = None;
    let mut last_models: Option<String> = None;

    for line in lines {
        let Some(path) = import_of(line, short_name) else {
            continue;
        };
        if path.contains(&format!("{ENTITY_PATH_SEGMENT}::")) {
            last_models = Some(path);
        } else {
            last_any = Some(path);
        }
    }

    last_models.or(last_any).map(ResolvedEntity::new)
}

/// If `line` is a `use` statement importing `short_name`, return the full
/// path it binds. Handles plain paths and single-level brace groups.
fn import_of(line: &str, short_name: &str) -> Option<String> {
    let trimmed = line.trim();
    let body = trimmed
        .strip_prefix("pub use ")
        .or_else(|| trimmed.strip_prefix("use "))?
        .trim_end_matches(';')
        .trim();

    if let Some((prefix, group)) = body.split_once('{') {
        let group = group.trim_end_matches('}');
        for item in group.split(',') {
            if item.trim() == short_name {
                return Some(format!("{}{}", prefix.trim(), short_name));
            }
        }
        return None;
    }

    let last = body.rsplit("::").next()?.trim();
    if last == short_name {
        Some(body.to_string())
    } else {
        None
    }
}
