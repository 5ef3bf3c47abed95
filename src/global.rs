//! Process-wide `set_language` entry point for manual and debug invocation.
use std::sync::Arc;
use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::{document::Document, localizer::{ApplyReport, Localizer}};

#[async_trait]
pub trait LanguageSwitch: Send + Sync {
    async fn set_language(&self, lang: &str) -> ApplyReport;
}

#[async_trait]
impl<D: Document + 'static> LanguageSwitch for Localizer<D> {
    async fn set_language(&self, lang: &str) -> ApplyReport { Localizer::set_language(self, lang).await }
}

static ACTIVE: OnceCell<Arc<dyn LanguageSwitch>> = OnceCell::new();

/// Register the page's localizer (one-time). Returns `false` if one was
/// already installed; the first registration stays.
pub fn install(switch: Arc<dyn LanguageSwitch>) -> bool { ACTIVE.set(switch).is_ok() }

pub fn is_installed() -> bool { ACTIVE.get().is_some() }

/// Apply `lang` through the installed localizer; `None` when nothing is installed.
pub async fn set_language(lang: &str) -> Option<ApplyReport> {
    let switch = ACTIVE.get()?.clone();
    Some(switch.set_language(lang).await)
}
