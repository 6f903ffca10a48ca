//! Plain-text rendering of the three season views for the terminal.

use crate::core::view::RankingView;
use crate::core::{EntityKind, Metric, PerformanceCount, Season, StandingsRow};

const NO_DATA: &str = "(no data)";

pub fn standings_table(season: Season, kind: EntityKind, standings: &[StandingsRow]) -> String {
    let mut out = format!("🏆 {} Standings for {}\n", kind.label(), season);
    if standings.is_empty() {
        out.push_str(NO_DATA);
        out.push('\n');
        return out;
    }

    let name_width = column_width(standings.iter().map(|s| s.entity.as_str()), kind.as_str());
    let team_width = column_width(
        standings.iter().map(|s| s.team.as_deref().unwrap_or("")),
        "team",
    );

    out.push_str(&format!(
        "{:>3}  {:<name_width$}  {:<team_width$}  {:>7}\n",
        "#",
        kind.as_str(),
        "team",
        "points"
    ));
    for (i, row) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}  {:<name_width$}  {:<team_width$}  {:>7}\n",
            i + 1,
            row.entity,
            row.team.as_deref().unwrap_or(""),
            format_points(row.points)
        ));
    }
    out
}

/// 走勢摘要：輪次範圍、選取的車手/車隊，以及高亮輪次的名次
pub fn evolution_summary<S: AsRef<str>>(
    view: &RankingView<'_>,
    selection: &[S],
    highlight: Option<i32>,
) -> String {
    let mut out = String::from("📈 Ranking Evolution\n");
    let Some((min, max)) = view.round_bounds() else {
        out.push_str(NO_DATA);
        out.push('\n');
        return out;
    };

    let names: Vec<&str> = selection.iter().map(AsRef::as_ref).collect();
    out.push_str(&format!(
        "rounds {}..={}, showing: {} ({} points)\n",
        min,
        max,
        names.join(", "),
        view.filter(selection).len()
    ));

    let round = highlight
        .and_then(|r| view.clamp_round(r))
        .or_else(|| view.default_highlight())
        .unwrap_or(min);
    out.push_str(&format!("highlighted round {}\n", round));

    for point in view
        .at_round(round)
        .into_iter()
        .filter(|p| names.contains(&p.entity.as_str()))
    {
        out.push_str(&format!("  P{:<3} {}\n", point.rank, point.entity));
    }
    out
}

/// 把長表轉回每列一個車手/車隊
pub fn performance_table(kind: EntityKind, counts: &[PerformanceCount]) -> String {
    let mut out = String::from("💪 Wins, Podiums, DNFs and Finishes in Points\n");
    if counts.is_empty() {
        out.push_str(NO_DATA);
        out.push('\n');
        return out;
    }

    let name_width = column_width(counts.iter().map(|c| c.entity.as_str()), kind.as_str());

    out.push_str(&format!("{:<name_width$}", kind.as_str()));
    for metric in Metric::ALL {
        out.push_str(&format!("  {:>w$}", metric.name(), w = metric.name().len()));
    }
    out.push('\n');

    for group in counts.chunks(Metric::ALL.len()) {
        out.push_str(&format!("{:<name_width$}", group[0].entity));
        for count in group {
            let width = count.metric.name().len();
            out.push_str(&format!("  {:>width$}", count.count));
        }
        out.push('\n');
    }
    out
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

fn format_points(points: f64) -> String {
    if points.fract() == 0.0 {
        format!("{:.0}", points)
    } else {
        format!("{:.1}", points)
    }
}
