pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MemoryStore, PostgresStore};
pub use config::{DashboardConfig, DatabaseConfig};
pub use crate::core::{dashboard::Dashboard, report::ReportWriter, view::RankingView};
pub use domain::model::{
    EntityKind, EvolutionPoint, Metric, PerformanceCount, ResultRow, Season, SeasonReport,
    StandingsRow,
};
pub use utils::error::{DashboardError, Result};
