#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/facilities";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
