//! Candidate locations for locale files relative to the current page.

/// Default directory name holding `<lang>.json` files.
pub const DEFAULT_LOCALES_DIR: &str = "locales";

/// First segment of the page path treated as the project root
/// (`/myproject/page.html` -> `/myproject/`). `/` for an empty path.
pub fn project_root(page_path: &str) -> String {
    match page_path.split('/').find(|s| !s.is_empty()) {
        Some(first) => format!("/{first}/"),
        None => "/".to_string(),
    }
}

/// The six base prefixes tried in order when looking for a locale file.
pub fn candidate_bases(page_path: &str, locales_dir: &str) -> Vec<String> {
    let dir = locales_dir.trim_matches('/');
    let root = project_root(page_path);
    vec![
        format!("./{dir}/"),
        format!("{dir}/"),
        format!("../{dir}/"),
        format!("../../{dir}/"),
        format!("{root}{dir}/"),
        format!("/{dir}/"),
    ]
}

/// `<base>/<lang>.json`, normalizing the separator.
pub fn locale_reference(base: &str, lang: &str) -> String {
    if base.ends_with('/') { format!("{base}{lang}.json") } else { format!("{base}/{lang}.json") }
}
