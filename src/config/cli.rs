use crate::config::toml_config::DashboardConfig;
use crate::core::{EntityKind, Season};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "f1-dashboard")]
#[command(about = "Formula 1 standings, ranking evolution and performance views per season")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Season year (2000-2024 have data)
    #[arg(short, long)]
    pub season: Option<Season>,

    /// driver or constructor
    #[arg(short, long)]
    pub entity: Option<EntityKind>,

    /// Standings CSV to read instead of the database (needs --results-fixture)
    #[arg(long, requires = "results_fixture")]
    pub standings_fixture: Option<String>,

    /// Race results CSV to read instead of the database (needs --standings-fixture)
    #[arg(long, requires = "standings_fixture")]
    pub results_fixture: Option<String>,

    /// Entities to show in the ranking evolution (default: first five)
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<String>,

    /// Round to highlight in the ranking evolution
    #[arg(long)]
    pub highlight_round: Option<i32>,

    #[arg(long)]
    pub output_path: Option<String>,

    /// Output formats inside the report bundle (csv, json)
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<String>,

    /// Print the views without writing a report bundle
    #[arg(long)]
    pub no_export: bool,

    /// Print the SQL statements and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// (積分榜, 單場成績) CSV 路徑，兩者都有才回傳
    pub fn fixtures(&self) -> Option<(&str, &str)> {
        match (&self.standings_fixture, &self.results_fixture) {
            (Some(standings), Some(results)) => Some((standings.as_str(), results.as_str())),
            _ => None,
        }
    }

    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut DashboardConfig) {
        if let Some(season) = self.season {
            config.dashboard.default_season = Some(season.year());
        }
        if let Some(entity) = self.entity {
            config.dashboard.default_entity = Some(entity.as_str().to_string());
        }
        if let Some(output_path) = &self.output_path {
            config.output.output_path = output_path.clone();
        }
        if !self.format.is_empty() {
            config.output.output_formats = self.format.clone();
        }
    }
}
