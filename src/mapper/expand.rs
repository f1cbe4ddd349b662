//! URL emission: static routes and placeholder expansion.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// First `{name}` placeholder in a URI template.
pub fn first_placeholder(uri: &str) -> Option<&str> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| Regex::new(r"\{([^}]*)\}").expect("placeholder regex"));
    re.captures(uri).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Resolve a route URI against the application base URL.
pub fn absolute_url(base: &Url, uri: &str) -> Result<String, url::ParseError> {
    Ok(base.join(uri.trim_start_matches('/'))?.to_string())
}

/// Substitute an identifier for the template's first placeholder.
///
/// Only the first placeholder name found is honored; every occurrence of
/// that name is replaced. Templates with additional, differently-named
/// placeholders keep them verbatim.
pub fn substitute(uri: &str, id: &str) -> String {
    match first_placeholder(uri) {
        Some(name) => uri.replace(&format!("{{{name}}}"), id),
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_placeholder() {
        assert_eq!(first_placeholder("/users/{id}"), Some("id"));
        assert_eq!(first_placeholder("/users/{user}/posts/{post}"), Some("user"));
        assert_eq!(first_placeholder("/about"), None);
    }

    #[test]
    fn test_substitute() {
        assert_eq!(substitute("/users/{id}", "42"), "/users/42");
        assert_eq!(substitute("/u/{id}/compare/{id}", "7"), "/u/7/compare/7");
        // Second, differently-named placeholder is left alone.
        assert_eq!(
            substitute("/users/{user}/posts/{post}", "3"),
            "/users/3/posts/{post}"
        );
        assert_eq!(substitute("/about", "9"), "/about");
    }

    #[test]
    fn test_absolute_url() {
        let base = Url::parse("https://example.com/").unwrap();
        assert_eq!(
            absolute_url(&base, "/users/1").unwrap(),
            "https://example.com/users/1"
        );
        assert_eq!(
            absolute_url(&base, "about").unwrap(),
            "https://example.com/about"
        );

        let nested = Url::parse("https://example.com/app/").unwrap();
        assert_eq!(
            absolute_url(&nested, "/users/1").unwrap(),
            "https://example.com/app/users/1"
        );
    }
}
