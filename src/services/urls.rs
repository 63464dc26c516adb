/// Search endpoint of the site: `<base>/?do=search&subaction=search&q=<query>`
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/?do=search&subaction=search&q={}",
        base_url,
        urlencoding::encode(query)
    )
}

/// Makes an item link absolute.
///
/// Links that already carry a network scheme are returned as-is; anything else
/// is treated as a path on the site and prefixed with `base_url`.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://rezka-ua.pub";

    #[test]
    fn test_build_search_url_encodes_query() {
        assert_eq!(
            build_search_url(BASE, "Форсаж 7 & co"),
            "https://rezka-ua.pub/?do=search&subaction=search&q=%D0%A4%D0%BE%D1%80%D1%81%D0%B0%D0%B6%207%20%26%20co"
        );
    }

    #[test]
    fn test_build_search_url_plain_ascii() {
        assert_eq!(
            build_search_url(BASE, "dune"),
            "https://rezka-ua.pub/?do=search&subaction=search&q=dune"
        );
    }

    #[test]
    fn test_resolve_relative_path() {
        assert_eq!(
            resolve_url(BASE, "/films/drama/123-heat.html"),
            "https://rezka-ua.pub/films/drama/123-heat.html"
        );
    }

    #[test]
    fn test_resolve_absolute_url_unchanged() {
        let absolute = "https://mirror.example/films/123-heat.html";
        assert_eq!(resolve_url(BASE, absolute), absolute);
        assert_eq!(resolve_url(BASE, "http://plain.example/x"), "http://plain.example/x");
    }

    #[test]
    fn test_resolve_is_not_applied_twice() {
        let once = resolve_url(BASE, "/series/1-x.html");
        assert_eq!(resolve_url(BASE, &once), once);
    }
}
