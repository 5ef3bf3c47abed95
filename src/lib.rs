//! Runtime localization for static pages: locate and cache JSON locale files,
//! apply them to marked elements, keep language controls and the persisted
//! choice in sync.
pub mod config; pub mod document; pub mod env; pub mod error; pub mod global;
pub mod lang; pub mod loader; pub mod localizer; pub mod locate; pub mod logging; pub mod net;

pub use config::{Config, ContentPolicy};
pub use document::{Document, MemoryDocument};
pub use env::{Environment, FileStorage, MemoryStorage, SystemLocale};
pub use lang::Dictionary;
pub use loader::LocaleLoader;
pub use localizer::{Action, ApplyReport, Binding, Localizer, Startup};
pub use net::{DirFetcher, HttpFetcher, LocaleFetcher};
