use crate::core::evolution::evolution_from_rows;
use crate::core::performance::performance_from_rows;
use crate::core::standings::standings_from_rows;
use crate::core::{
    EntityKind, EvolutionPoint, PerformanceCount, ResultRow, ResultStore, RowSource, Season,
    SeasonReport, StandingsRow,
};
use crate::utils::error::Result;

/// 儀表板的三個查詢。資料來源由呼叫端注入，這裡不持有任何全域連線。
pub struct Dashboard<S: ResultStore> {
    store: S,
}

impl<S: ResultStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn aggregate_standings(
        &self,
        season: Season,
        kind: EntityKind,
    ) -> Result<Vec<StandingsRow>> {
        let Some(rows) = self.season_rows(RowSource::Standings, kind, season).await? else {
            return Ok(Vec::new());
        };

        let standings = standings_from_rows(season, &rows);
        tracing::info!(
            "🏆 {} standings for {}: {} rows",
            kind.label(),
            season,
            standings.len()
        );
        Ok(standings)
    }

    pub async fn extract_evolution(
        &self,
        season: Season,
        kind: EntityKind,
    ) -> Result<Vec<EvolutionPoint>> {
        let Some(rows) = self.season_rows(RowSource::Standings, kind, season).await? else {
            return Ok(Vec::new());
        };

        let evolution = evolution_from_rows(season, &rows);
        tracing::info!(
            "📈 {} ranking evolution for {}: {} points",
            kind.label(),
            season,
            evolution.len()
        );
        Ok(evolution)
    }

    pub async fn summarize_performance(
        &self,
        season: Season,
        kind: EntityKind,
    ) -> Result<Vec<PerformanceCount>> {
        let Some(rows) = self.season_rows(RowSource::RaceResults, kind, season).await? else {
            return Ok(Vec::new());
        };

        let performance = performance_from_rows(season, &rows);
        tracing::info!(
            "💪 {} performance for {}: {} records",
            kind.label(),
            season,
            performance.len()
        );
        Ok(performance)
    }

    /// 三個查詢彼此獨立，同時執行；任一失敗即整體失敗
    pub async fn season_report(&self, season: Season, kind: EntityKind) -> Result<SeasonReport> {
        let (standings, evolution, performance) = tokio::try_join!(
            self.aggregate_standings(season, kind),
            self.extract_evolution(season, kind),
            self.summarize_performance(season, kind),
        )?;

        Ok(SeasonReport {
            season,
            entity_kind: kind,
            standings,
            evolution,
            performance,
        })
    }

    // 不支援的賽季直接視為沒有資料，不送查詢
    async fn season_rows(
        &self,
        source: RowSource,
        kind: EntityKind,
        season: Season,
    ) -> Result<Option<Vec<ResultRow>>> {
        if !season.is_supported() {
            tracing::debug!(
                "Season {} outside {}..={}, returning no data",
                season,
                Season::FIRST,
                Season::LAST
            );
            return Ok(None);
        }

        let rows = self.store.fetch_rows(source, kind, season).await?;
        tracing::debug!("Fetched {} {:?} rows for {} {}", rows.len(), source, kind, season);
        Ok(Some(rows))
    }
}
