use crate::core::{EntityKind, ResultRow, ResultStore, RowSource, Season};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Read;

/// 記憶體中的成績資料，測試與 `--standings-fixture` / `--results-fixture` 模式使用
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: HashMap<(RowSource, EntityKind), Vec<ResultRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_rows(
        mut self,
        source: RowSource,
        kind: EntityKind,
        rows: Vec<ResultRow>,
    ) -> Self {
        self.rows.entry((source, kind)).or_default().extend(rows);
        self
    }

    /// 讀取 CSV (欄位同 `ResultRow`) 放進指定來源，每列都會檢查名次與積分
    pub fn with_csv<R: Read>(self, source: RowSource, kind: EntityKind, reader: R) -> Result<Self> {
        let rows = read_csv_rows(reader)?;
        tracing::debug!("Loaded {} {} rows for {:?}", rows.len(), kind, source);
        Ok(self.with_source_rows(source, kind, rows))
    }

    /// 積分榜與單場成績各自一份 CSV
    pub fn from_fixtures(kind: EntityKind, standings: &[u8], results: &[u8]) -> Result<Self> {
        Self::new()
            .with_csv(RowSource::Standings, kind, standings)?
            .with_csv(RowSource::RaceResults, kind, results)
    }
}

pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<ResultRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<ResultRow>() {
        let row = record?;
        row.check()?;
        rows.push(row);
    }
    Ok(rows)
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn fetch_rows(
        &self,
        source: RowSource,
        kind: EntityKind,
        season: Season,
    ) -> Result<Vec<ResultRow>> {
        Ok(self
            .rows
            .get(&(source, kind))
            .map(|rows| {
                rows.iter()
                    .filter(|row| row.season == season.year())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
