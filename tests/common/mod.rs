#![allow(dead_code)]
use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use site_i18n::{
    config::Config, env::{Environment, FixedPreference, MemoryStorage}, error::FetchError, net::parse_locale,
    Dictionary, LocaleFetcher, LocaleLoader, Localizer, MemoryDocument,
};

/// Serves canned bodies by reference and records every request.
#[derive(Default)]
pub struct FakeSite {
    files: HashMap<String, Vec<u8>>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self { Self::default() }

    pub fn file(mut self, reference: &str, body: Value) -> Self {
        self.files.insert(reference.to_string(), body.to_string().into_bytes());
        self
    }

    pub fn raw(mut self, reference: &str, body: &str) -> Self {
        self.files.insert(reference.to_string(), body.as_bytes().to_vec());
        self
    }

    pub fn requests(&self) -> Vec<String> { self.requests.lock().clone() }
}

#[async_trait]
impl LocaleFetcher for FakeSite {
    async fn fetch(&self, reference: &str) -> Result<Dictionary, FetchError> {
        self.requests.lock().push(reference.to_string());
        match self.files.get(reference) {
            Some(body) => parse_locale(body),
            None => Err(FetchError::Status(404)),
        }
    }
}

pub fn localizer(site: Arc<FakeSite>, doc: MemoryDocument, storage: MemoryStorage, preference: Option<&str>) -> Localizer<MemoryDocument> {
    let config = Config::default();
    let loader = LocaleLoader::new(site, "/myrepo/index.html", &config.locales_dir);
    let env = Environment::new(storage, FixedPreference(preference.map(str::to_string)));
    Localizer::new(config, loader, doc, env)
}
