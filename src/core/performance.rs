use crate::core::{PerformanceCount, PerformanceTally, ResultRow, Season};
use std::collections::BTreeMap;

/// 每個車手/車隊的寬表計數，依名稱排序
pub fn tallies_from_rows(season: Season, rows: &[ResultRow]) -> Vec<PerformanceTally> {
    let mut tallies: BTreeMap<&str, PerformanceTally> = BTreeMap::new();

    for row in rows.iter().filter(|row| row.season == season.year()) {
        tallies
            .entry(row.entity.as_str())
            .or_insert_with(|| PerformanceTally::new(row.entity.clone()))
            .record(row);
    }

    tallies.into_values().collect()
}

/// 勝場、頒獎台、DNF、得分完賽四項計數的長表。
///
/// 每個車手/車隊固定輸出四筆 (wins, podiums, dnfs, finishes_in_points)，
/// 計數為 0 也保留，圖表的分組順序才會一致。
pub fn performance_from_rows(season: Season, rows: &[ResultRow]) -> Vec<PerformanceCount> {
    tallies_from_rows(season, rows)
        .iter()
        .flat_map(|tally| tally.melt())
        .collect()
}
