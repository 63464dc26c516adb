use regex::Regex;
use std::sync::LazyLock;

use crate::models::ComponentContext;

/// Matches a `(YYYY)` year annotation and everything after it
static RE_YEAR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(\d{4}\).*$").expect("year suffix pattern is valid")
});

/// Strips a trailing "(year)" annotation, and anything following it, from a title
pub fn normalize_title(raw: &str) -> String {
    RE_YEAR_SUFFIX.replace(raw, "").into_owned()
}

/// Query the component starts with.
///
/// An explicit non-empty query wins; otherwise the movie's title (or series
/// name) is used verbatim. Empty means interactive mode with nothing to search.
pub fn initial_query(context: &ComponentContext) -> String {
    if let Some(query) = context.query.as_deref().filter(|q| !q.is_empty()) {
        return query.to_string();
    }

    context
        .movie
        .as_ref()
        .map(|movie| movie.display_title().to_string())
        .unwrap_or_default()
}
