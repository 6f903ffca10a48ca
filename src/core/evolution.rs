use crate::core::{EvolutionPoint, ResultRow, Season};

/// 取出排名走勢：(round, entity, rank)，依輪次、名次排序。
///
/// 假設上游每個車手/車隊每輪只有一筆排名；若資料重複，重複的點會原樣
/// 保留，不在這裡修正。名次相同時以名稱排序，讓輸出固定。
pub fn evolution_from_rows(season: Season, rows: &[ResultRow]) -> Vec<EvolutionPoint> {
    let mut points: Vec<EvolutionPoint> = rows
        .iter()
        .filter(|row| row.season == season.year())
        .map(|row| EvolutionPoint {
            round: row.round,
            entity: row.entity.clone(),
            rank: row.rank,
        })
        .collect();

    points.sort_by(|a, b| {
        a.round
            .cmp(&b.round)
            .then(a.rank.cmp(&b.rank))
            .then_with(|| a.entity.cmp(&b.entity))
    });
    points
}
