use crate::core::{ResultRow, Season, StandingsRow};
use std::cmp::Ordering;
use std::collections::HashMap;

/// 由賽季紀錄計算積分榜。
///
/// 每個車手/車隊只保留一列：取該賽季最高積分的那筆紀錄。積分相同時，
/// 有車隊名稱的紀錄優先，再依車隊名稱字母順序取第一個，所以賽季中途
/// 換隊的車手結果固定。輸出依積分由高到低，同分再依名稱排序。
pub fn standings_from_rows(season: Season, rows: &[ResultRow]) -> Vec<StandingsRow> {
    let mut best: HashMap<&str, &ResultRow> = HashMap::new();

    for row in rows.iter().filter(|row| row.season == season.year()) {
        best.entry(row.entity.as_str())
            .and_modify(|current| {
                if prefer(row, *current) == Ordering::Less {
                    *current = row;
                }
            })
            .or_insert(row);
    }

    let mut standings: Vec<StandingsRow> = best
        .into_values()
        .map(|row| StandingsRow {
            entity: row.entity.clone(),
            team: row.team.clone(),
            points: row.points,
        })
        .collect();

    standings.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then_with(|| a.entity.cmp(&b.entity))
    });
    standings
}

// Less 表示 candidate 應取代 current
fn prefer(candidate: &ResultRow, current: &ResultRow) -> Ordering {
    current
        .points
        .total_cmp(&candidate.points)
        .then_with(|| match (&candidate.team, &current.team) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
