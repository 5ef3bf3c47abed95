//! Locale loading: candidate search, first-success wins, per-language cache.
use std::{collections::HashMap, sync::Arc};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::{lang::Dictionary, locate, net::LocaleFetcher};

/// Loads each language at most once per session. Languages nobody could find
/// are cached as an empty dictionary so later calls don't search again.
pub struct LocaleLoader {
    fetcher: Arc<dyn LocaleFetcher>,
    page_path: String,
    locales_dir: String,
    cache: RwLock<HashMap<String, Arc<Dictionary>>>,
    // diagnostic only
    resolved_base: RwLock<Option<String>>,
}

impl LocaleLoader {
    pub fn new(fetcher: Arc<dyn LocaleFetcher>, page_path: &str, locales_dir: &str) -> Self {
        Self {
            fetcher,
            page_path: page_path.to_string(),
            locales_dir: locales_dir.to_string(),
            cache: RwLock::new(HashMap::new()),
            resolved_base: RwLock::new(None),
        }
    }

    pub fn candidates(&self) -> Vec<String> { locate::candidate_bases(&self.page_path, &self.locales_dir) }

    /// Base that served the most recently loaded locale.
    pub fn resolved_base(&self) -> Option<String> { self.resolved_base.read().clone() }

    pub fn is_cached(&self, lang: &str) -> bool { self.cache.read().contains_key(lang) }

    /// Dictionary for `lang`; empty when no candidate could serve it. Never fails.
    pub async fn load(&self, lang: &str) -> Arc<Dictionary> {
        let cached = self.cache.read().get(lang).cloned();
        if let Some(hit) = cached { return hit; }

        for base in self.candidates() {
            let reference = locate::locale_reference(&base, lang);
            debug!(%lang, %base, "i18n: trying base");
            match self.fetcher.fetch(&reference).await {
                Ok(dict) => {
                    let base = if base.ends_with('/') { base } else { format!("{base}/") };
                    info!(%lang, base = %base, "i18n: loaded locale");
                    *self.resolved_base.write() = Some(base);
                    let dict = Arc::new(dict);
                    self.cache.write().insert(lang.to_string(), dict.clone());
                    return dict;
                }
                Err(e) => debug!(%reference, error = %e, "i18n: candidate failed"),
            }
        }

        warn!(%lang, "i18n: locale not found");
        let empty = Arc::new(Dictionary::empty());
        self.cache.write().insert(lang.to_string(), empty.clone());
        empty
    }
}
