use std::{path::PathBuf, sync::Arc};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reqwest::Url;

use site_i18n::{
    config::Config, env::{LanguagePreference, Storage}, lang, locate, logging, DirFetcher, FileStorage, HttpFetcher,
    LocaleFetcher, LocaleLoader, SystemLocale,
};

#[derive(Parser)]
#[command(name = "site-i18n", about = "Inspect and switch locales of a static site")]
struct Cli {
    /// TOML file overriding the default settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// JSON file holding the persisted language choice
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a locale through the candidate search and print keys
    Lookup {
        /// Page URL the locale files are resolved against
        #[arg(long)]
        page: Url,
        /// Serve files from this local checkout instead of over HTTP
        #[arg(long)]
        site_root: Option<PathBuf>,
        #[arg(long)]
        lang: Option<String>,
        keys: Vec<String>,
    },
    /// Print the locale references tried for a page
    Candidates {
        #[arg(long)]
        page: Url,
        #[arg(long)]
        lang: String,
    },
    /// Persist a language choice
    Use { lang: String },
    /// Persist the language the toggle control would switch to
    Toggle,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = match &cli.config { Some(p) => Config::load(p)?, None => Config::default() };
    let storage_path = cli.storage.clone().or_else(FileStorage::default_path).context("no storage location available")?;
    let mut storage = FileStorage::open(storage_path);
    let saved = storage.get(&config.storage_key).filter(|l| !l.is_empty());
    let fallback = || config.default_language(SystemLocale.preferred_language().as_deref());

    match cli.command {
        Command::Lookup { page, site_root, lang, keys } => {
            let lang = lang.or(saved).unwrap_or_else(fallback);
            let fetcher: Arc<dyn LocaleFetcher> = match site_root {
                Some(root) => Arc::new(DirFetcher::new(root, page.path())?),
                None => Arc::new(HttpFetcher::new(page.clone())),
            };
            let loader = LocaleLoader::new(fetcher, page.path(), &config.locales_dir);
            let dict = loader.load(&lang).await;
            if let Some(base) = loader.resolved_base() { eprintln!("{lang}: served from {base}"); }
            if keys.is_empty() {
                println!("{}", serde_json::to_string_pretty(&dict.as_value())?);
            }
            for key in keys {
                match dict.get(&key) {
                    Some(v) => println!("{key} = {}", lang::render(v)),
                    None => println!("{key}: missing"),
                }
            }
        }
        Command::Candidates { page, lang } => {
            for base in locate::candidate_bases(page.path(), &config.locales_dir) {
                let reference = locate::locale_reference(&base, &lang);
                match page.join(&reference) {
                    Ok(url) => println!("{reference}\t{url}"),
                    Err(e) => println!("{reference}\t<{e}>"),
                }
            }
        }
        Command::Use { lang } => {
            storage.set(&config.storage_key, &lang)?;
            println!("{lang}");
        }
        Command::Toggle => {
            let current = saved.unwrap_or_else(fallback);
            let next = config.next_language(&current);
            storage.set(&config.storage_key, &next)?;
            println!("{current} -> {next}");
        }
    }
    Ok(())
}
