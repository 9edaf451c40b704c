pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{
    http::HttpFacilitySource,
    terminal::{TerminalDocument, TerminalMap},
};
pub use crate::core::{
    app::LocatorApp,
    filter::{filter_facilities, normalize},
    loader::{DataLoader, LoadOutcome},
    view::FilterView,
};
pub use domain::model::{Facility, FilterState, LooseBool};
pub use utils::error::{LoadError, LoadErrorKind, LocatorError, Result};
