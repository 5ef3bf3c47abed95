//! Applies a language to the page and keeps the language controls in sync.
use std::collections::HashSet;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::{
    config::{Config, ContentPolicy},
    document::{ContentKind, Document, Marker},
    env::{Environment, LanguagePreference, Storage},
    lang::{self, Dictionary},
    loader::LocaleLoader,
};

/// What clicking a bound control does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Select(String),
    Toggle,
}

/// A control the host must wire to [`Localizer::dispatch`] on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<E> {
    pub element: E,
    pub action: Action,
}

/// Outcome of one application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplyReport {
    pub language: String,
    /// Marked elements whose content or placeholder was replaced.
    pub updated: usize,
    /// Distinct keys with no value, in first-seen order.
    pub missing: Vec<String>,
}

pub struct Startup<E> {
    pub bindings: Vec<Binding<E>>,
    pub report: ApplyReport,
}

pub struct Localizer<D: Document> {
    config: Config,
    loader: LocaleLoader,
    document: Mutex<D>,
    storage: Mutex<Box<dyn Storage>>,
    preference: Box<dyn LanguagePreference>,
}

impl<D: Document> Localizer<D> {
    pub fn new(config: Config, loader: LocaleLoader, document: D, env: Environment) -> Self {
        Self { config, loader, document: Mutex::new(document), storage: Mutex::new(env.storage), preference: env.preference }
    }

    pub fn config(&self) -> &Config { &self.config }
    pub fn loader(&self) -> &LocaleLoader { &self.loader }

    /// Run `f` against the page, e.g. to inspect it after an application.
    pub fn with_document<R>(&self, f: impl FnOnce(&D) -> R) -> R {
        let doc = self.document.lock();
        f(&*doc)
    }

    /// Saved choice; an empty value counts as none.
    pub fn persisted_language(&self) -> Option<String> {
        self.storage.lock().get(&self.config.storage_key).filter(|l| !l.is_empty())
    }

    pub fn default_language(&self) -> String {
        self.config.default_language(self.preference.preferred_language().as_deref())
    }

    /// Language applied at startup: persisted choice, else derived default.
    pub fn initial_language(&self) -> String {
        self.persisted_language().unwrap_or_else(|| self.default_language())
    }

    /// Language the page currently shows, as seen by the toggle control.
    pub fn current_language(&self) -> String {
        let declared = self.document.lock().lang().filter(|l| !l.is_empty());
        declared.or_else(|| self.persisted_language()).unwrap_or_else(|| self.default_language())
    }

    /// Bind the language controls and apply the initial language once.
    pub async fn start(&self) -> Startup<D::Element> {
        let bindings = {
            let doc = self.document.lock();
            let mut bindings: Vec<_> = doc.language_buttons().into_iter()
                .map(|(element, code)| Binding { element, action: Action::Select(code) })
                .collect();
            if let Some(element) = doc.toggle() { bindings.push(Binding { element, action: Action::Toggle }); }
            bindings
        };
        let report = self.apply(&self.initial_language()).await;
        Startup { bindings, report }
    }

    pub async fn dispatch(&self, action: &Action) -> ApplyReport {
        match action {
            Action::Select(lang) => self.apply(lang).await,
            Action::Toggle => self.toggle().await,
        }
    }

    pub async fn toggle(&self) -> ApplyReport {
        let next = self.config.next_language(&self.current_language());
        self.apply(&next).await
    }

    /// Externally callable entry point; returns once the page is updated.
    pub async fn set_language(&self, lang: &str) -> ApplyReport { self.apply(lang).await }

    /// Load `lang` and synchronize the page to it. Never fails: an unknown
    /// language applies an empty dictionary, leaving the static content.
    pub async fn apply(&self, lang: &str) -> ApplyReport {
        let dict = self.loader.load(lang).await;
        let report = self.sync_document(lang, &dict);

        info!(%lang, updated = report.updated, "i18n: applied translations");
        if !report.missing.is_empty() {
            let head = shown(&report.missing, self.config.missing_log_limit);
            debug!(%lang, total = report.missing.len(), missing = ?head, "i18n: missing keys");
        }
        report
    }

    // page state and the persisted choice change under one document guard
    fn sync_document(&self, lang: &str, dict: &Dictionary) -> ApplyReport {
        let kind = match self.config.content_policy { ContentPolicy::TrustedMarkup => ContentKind::Markup, ContentPolicy::Escape => ContentKind::Text };
        let mut doc = self.document.lock();
        let mut report = ApplyReport { language: lang.to_string(), ..ApplyReport::default() };
        let mut seen = HashSet::new();
        let mut miss = |key: String, report: &mut ApplyReport| {
            if seen.insert(key.clone()) { report.missing.push(key); }
        };

        for (el, key) in doc.marked(Marker::Text) {
            match dict.get(&key) {
                Some(v) => { doc.set_content(&el, &lang::render(v), kind); report.updated += 1; }
                None => miss(key, &mut report),
            }
        }
        for (el, key) in doc.marked(Marker::Placeholder) {
            match dict.get(&key) {
                Some(v) => { doc.set_placeholder(&el, &lang::render(v)); report.updated += 1; }
                None => miss(key, &mut report),
            }
        }

        for (el, code) in doc.language_buttons() {
            doc.set_active(&el, &self.config.active_classes, code == lang);
        }
        if let Some(toggle) = doc.toggle() { doc.set_label(&toggle, &lang.to_uppercase()); }
        doc.set_lang(lang);

        if let Err(e) = self.storage.lock().set(&self.config.storage_key, lang) {
            warn!(%lang, error = %e, "i18n: could not persist language");
        }
        report
    }
}

/// Leading part of `missing` that goes into the log line.
fn shown(missing: &[String], limit: usize) -> &[String] { &missing[..missing.len().min(limit)] }
