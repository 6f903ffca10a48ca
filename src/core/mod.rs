pub mod dashboard;
pub mod evolution;
pub mod performance;
pub mod report;
pub mod standings;
pub mod view;

pub use crate::domain::model::{
    EntityKind, EvolutionPoint, Metric, PerformanceCount, PerformanceTally, ResultRow, Season,
    SeasonReport, StandingsRow,
};
pub use crate::domain::ports::{ConfigProvider, ResultStore, RowSource, Storage};
pub use crate::utils::error::Result;
