#[cfg(feature = "cli")]
pub mod cli;
pub mod database;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use database::DatabaseConfig;
pub use toml_config::DashboardConfig;
