use crate::utils::error::{DashboardError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// 賽季年份。可解析任何整數年份，但只有 2000–2024 有資料
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(i32);

impl Season {
    pub const FIRST: Season = Season(2000);
    pub const LAST: Season = Season(2024);

    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn year(self) -> i32 {
        self.0
    }

    pub fn is_supported(self) -> bool {
        self >= Self::FIRST && self <= Self::LAST
    }

    /// 可選賽季，最新的在前
    pub fn supported() -> impl Iterator<Item = Season> {
        (Self::FIRST.0..=Self::LAST.0).rev().map(Season)
    }
}

impl FromStr for Season {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DashboardError::InvalidSeasonError {
                input: s.to_string(),
                reason: "season is required".to_string(),
            });
        }

        trimmed
            .parse::<i32>()
            .map(Season)
            .map_err(|e| DashboardError::InvalidSeasonError {
                input: s.to_string(),
                reason: format!("not an integer year ({})", e),
            })
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 統計單位：車手或車隊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Driver,
    Constructor,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Driver, EntityKind::Constructor];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Driver => "driver",
            EntityKind::Constructor => "constructor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Driver => "Drivers",
            EntityKind::Constructor => "Constructors",
        }
    }
}

impl FromStr for EntityKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driver" | "drivers" => Ok(EntityKind::Driver),
            "constructor" | "constructors" => Ok(EntityKind::Constructor),
            other => Err(DashboardError::InvalidConfigValueError {
                field: "entity".to_string(),
                value: other.to_string(),
                reason: "expected 'driver' or 'constructor'".to_string(),
            }),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 單場比賽的一筆成績紀錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ResultRow {
    pub season: i32,
    pub round: i32,
    pub entity: String,
    #[serde(default)]
    pub team: Option<String>,
    pub rank: i32,
    pub points: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub win: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub podium: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub points_finish: bool,
    pub status: String,
}

impl ResultRow {
    pub const DNF_STATUS: &'static str = "DNF";

    pub fn is_dnf(&self) -> bool {
        self.status == Self::DNF_STATUS
    }

    pub fn check(&self) -> Result<()> {
        if self.rank < 1 {
            return Err(DashboardError::ProcessingError {
                message: format!(
                    "{} round {}: rank must be at least 1, got {}",
                    self.entity, self.round, self.rank
                ),
            });
        }
        if self.points.is_nan() || self.points < 0.0 {
            return Err(DashboardError::ProcessingError {
                message: format!(
                    "{} round {}: points must be non-negative, got {}",
                    self.entity, self.round, self.points
                ),
            });
        }
        Ok(())
    }
}

// 資料庫匯出常用 1/0 表示旗標
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" => Ok(true),
        "0" | "false" | "f" | "no" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!("invalid flag value: {}", other))),
    }
}

/// 積分榜的一列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub entity: String,
    pub team: Option<String>,
    pub points: f64,
}

/// 排名走勢圖上的一點
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvolutionPoint {
    pub round: i32,
    pub entity: String,
    pub rank: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    #[serde(rename = "wins")]
    Wins,
    #[serde(rename = "podiums")]
    Podiums,
    #[serde(rename = "dnfs")]
    Dnfs,
    #[serde(rename = "finishes_in_points")]
    PointsFinishes,
}

impl Metric {
    /// 長表中每個車手/車隊的指標順序
    pub const ALL: [Metric; 4] = [
        Metric::Wins,
        Metric::Podiums,
        Metric::Dnfs,
        Metric::PointsFinishes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Wins => "wins",
            Metric::Podiums => "podiums",
            Metric::Dnfs => "dnfs",
            Metric::PointsFinishes => "finishes_in_points",
        }
    }

    /// 分組長條圖的顏色
    pub fn color(self) -> &'static str {
        match self {
            Metric::Wins => "green",
            Metric::Podiums => "blue",
            Metric::Dnfs => "red",
            Metric::PointsFinishes => "orange",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 寬表：每個車手/車隊一列，四個計數欄
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerformanceTally {
    pub entity: String,
    pub wins: u32,
    pub podiums: u32,
    pub dnfs: u32,
    pub points_finishes: u32,
}

impl PerformanceTally {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, row: &ResultRow) {
        if row.win {
            self.wins += 1;
        }
        if row.podium {
            self.podiums += 1;
        }
        if row.points_finish {
            self.points_finishes += 1;
        }
        if row.is_dnf() {
            self.dnfs += 1;
        }
    }

    pub fn count(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Wins => self.wins,
            Metric::Podiums => self.podiums,
            Metric::Dnfs => self.dnfs,
            Metric::PointsFinishes => self.points_finishes,
        }
    }

    /// 轉成長表，固定輸出四筆
    pub fn melt(&self) -> impl Iterator<Item = PerformanceCount> + '_ {
        Metric::ALL.into_iter().map(move |metric| PerformanceCount {
            entity: self.entity.clone(),
            metric,
            count: self.count(metric),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceCount {
    pub entity: String,
    pub metric: Metric,
    pub count: u32,
}

/// 同一賽季的三個視圖
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonReport {
    pub season: Season,
    pub entity_kind: EntityKind,
    pub standings: Vec<StandingsRow>,
    pub evolution: Vec<EvolutionPoint>,
    pub performance: Vec<PerformanceCount>,
}

impl SeasonReport {
    pub fn empty(season: Season, entity_kind: EntityKind) -> Self {
        Self {
            season,
            entity_kind,
            standings: Vec::new(),
            evolution: Vec::new(),
            performance: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty() && self.evolution.is_empty() && self.performance.is_empty()
    }
}
