use crate::domain::model::{EntityKind, ResultRow, Season};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 查詢使用的資料表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowSource {
    /// 每輪累積積分榜 (driver_standings / constructor_standings)
    Standings,
    /// 每場比賽成績 (final_f1)
    RaceResults,
}

/// 唯讀的比賽成績資料來源
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn fetch_rows(
        &self,
        source: RowSource,
        kind: EntityKind,
        season: Season,
    ) -> Result<Vec<ResultRow>>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn filename_template(&self) -> &str;
}
