use std::{fs, path::Path, sync::Arc};
use pretty_assertions::assert_eq;
use serde_json::json;

use site_i18n::{error::FetchError, DirFetcher, LocaleFetcher, LocaleLoader};

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

#[tokio::test]
async fn project_root_locales_found_from_nested_page() {
    let site = tempfile::tempdir().unwrap();
    write(site.path(), "myrepo/locales/id.json", r#"{"nav":{"home":"Beranda"}}"#);
    let fetcher = DirFetcher::new(site.path(), "/myrepo/docs/guide/page.html").unwrap();
    let loader = LocaleLoader::new(Arc::new(fetcher), "/myrepo/docs/guide/page.html", "locales");

    let dict = loader.load("id").await;

    assert_eq!(dict.get("nav.home"), Some(&json!("Beranda")));
    // ../../locales/ from /myrepo/docs/guide/ is /myrepo/locales/
    assert_eq!(loader.resolved_base().as_deref(), Some("../../locales/"));
}

#[tokio::test]
async fn site_root_locales_are_last_resort() {
    let site = tempfile::tempdir().unwrap();
    write(site.path(), "locales/en.json", r#"{"title":"Hi"}"#);
    write(site.path(), "a/b/c/locales/en.json", "{broken");
    let page = "/a/b/c/d/index.html";
    let loader = LocaleLoader::new(Arc::new(DirFetcher::new(site.path(), page).unwrap()), page, "locales");

    let dict = loader.load("en").await;

    assert_eq!(dict.get("title"), Some(&json!("Hi")));
    assert_eq!(loader.resolved_base().as_deref(), Some("/locales/"));
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let site = tempfile::tempdir().unwrap();
    let fetcher = DirFetcher::new(site.path(), "/index.html").unwrap();
    assert!(matches!(fetcher.fetch("locales/en.json").await, Err(FetchError::Io(_))));
}
