use crate::core::EvolutionPoint;
use std::collections::HashSet;

/// 走勢圖預設顯示的車手/車隊數
pub const DEFAULT_SELECTION_SIZE: usize = 5;

/// 高亮區塊在輪次兩側的寬度
pub const HIGHLIGHT_HALF_WIDTH: f64 = 0.4;

/// 排名走勢的呈現輔助：選單、篩選、輪次範圍與高亮。
/// 只讀取 `extract_evolution` 已產生的序列，可重複使用。
#[derive(Debug, Clone, Copy)]
pub struct RankingView<'a> {
    points: &'a [EvolutionPoint],
}

impl<'a> RankingView<'a> {
    pub fn new(points: &'a [EvolutionPoint]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &'a [EvolutionPoint] {
        self.points
    }

    /// 不重複的車手/車隊，依第一次出現的順序
    pub fn entities(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.points
            .iter()
            .map(|p| p.entity.as_str())
            .filter(|entity| seen.insert(*entity))
            .collect()
    }

    pub fn default_selection(&self) -> Vec<&'a str> {
        self.selection_of_size(DEFAULT_SELECTION_SIZE)
    }

    pub fn selection_of_size(&self, size: usize) -> Vec<&'a str> {
        let mut entities = self.entities();
        entities.truncate(size);
        entities
    }

    pub fn filter<S: AsRef<str>>(&self, selection: &[S]) -> Vec<&'a EvolutionPoint> {
        let wanted: HashSet<&str> = selection.iter().map(AsRef::as_ref).collect();
        self.points
            .iter()
            .filter(|p| wanted.contains(p.entity.as_str()))
            .collect()
    }

    pub fn round_bounds(&self) -> Option<(i32, i32)> {
        let min = self.points.iter().map(|p| p.round).min()?;
        let max = self.points.iter().map(|p| p.round).max()?;
        Some((min, max))
    }

    /// 預設高亮賽季中段 (max / 2)，並夾在範圍內
    pub fn default_highlight(&self) -> Option<i32> {
        let (min, max) = self.round_bounds()?;
        Some((max / 2).clamp(min, max))
    }

    pub fn clamp_round(&self, round: i32) -> Option<i32> {
        let (min, max) = self.round_bounds()?;
        Some(round.clamp(min, max))
    }

    pub fn highlight_band(&self, round: i32) -> Option<(f64, f64)> {
        let round = f64::from(self.clamp_round(round)?);
        Some((round - HIGHLIGHT_HALF_WIDTH, round + HIGHLIGHT_HALF_WIDTH))
    }

    /// 指定輪次中各車手/車隊的名次
    pub fn at_round(&self, round: i32) -> Vec<&'a EvolutionPoint> {
        self.points.iter().filter(|p| p.round == round).collect()
    }
}
