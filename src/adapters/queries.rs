//! SQL text for the results store.
//!
//! Every statement takes the season as `$1` and aliases its columns to the
//! `ResultRow` field names, so one `FromRow` impl decodes all of them.

use crate::core::{EntityKind, RowSource};

/// 一個 (資料表, 統計單位) 組合的查詢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonQuery {
    pub source: RowSource,
    pub kind: EntityKind,
}

impl SeasonQuery {
    pub fn new(source: RowSource, kind: EntityKind) -> Self {
        Self { source, kind }
    }

    pub fn table(&self) -> &'static str {
        match (self.source, self.kind) {
            (RowSource::Standings, EntityKind::Driver) => "driver_standings",
            (RowSource::Standings, EntityKind::Constructor) => "constructor_standings",
            (RowSource::RaceResults, _) => "final_f1",
        }
    }

    pub fn entity_column(&self) -> &'static str {
        match self.kind {
            EntityKind::Driver => "driver_name",
            EntityKind::Constructor => "constructor",
        }
    }

    fn team_expr(&self) -> &'static str {
        match self.kind {
            EntityKind::Driver => "constructor",
            EntityKind::Constructor => "NULL::text",
        }
    }

    /// 名次只取自資料本身，不補 0
    fn rank_expr(&self) -> String {
        match self.source {
            RowSource::Standings => "position::int4".to_string(),
            // 未完賽的 position 可能為 NULL，排在該輪最後
            RowSource::RaceResults => format!(
                "ROW_NUMBER() OVER (PARTITION BY round ORDER BY position NULLS LAST, {})::int4",
                self.entity_column()
            ),
        }
    }

    fn filter_expr(&self) -> &'static str {
        match self.source {
            RowSource::Standings => " AND position IS NOT NULL",
            RowSource::RaceResults => "",
        }
    }

    pub fn sql(&self) -> String {
        let flags = match self.source {
            // 積分榜沒有單場旗標
            RowSource::Standings => {
                "FALSE AS win, FALSE AS podium, FALSE AS points_finish, ''::text AS status"
            }
            RowSource::RaceResults => {
                "COALESCE(win, 0) = 1 AS win, \
                 COALESCE(podium, 0) = 1 AS podium, \
                 COALESCE(points_finish, 0) = 1 AS points_finish, \
                 COALESCE(status, '')::text AS status"
            }
        };

        format!(
            "SELECT year::int4 AS season, \
             round::int4 AS round, \
             {entity}::text AS entity, \
             {team} AS team, \
             {rank} AS rank, \
             COALESCE(points, 0)::float8 AS points, \
             {flags} \
             FROM {table} \
             WHERE year = $1{filter} \
             ORDER BY round, position",
            entity = self.entity_column(),
            team = self.team_expr(),
            rank = self.rank_expr(),
            filter = self.filter_expr(),
            flags = flags,
            table = self.table(),
        )
    }

    /// 儀表板會送出的全部查詢
    pub fn all() -> impl Iterator<Item = SeasonQuery> {
        EntityKind::ALL.into_iter().flat_map(|kind| {
            [RowSource::Standings, RowSource::RaceResults]
                .into_iter()
                .map(move |source| SeasonQuery::new(source, kind))
        })
    }
}
