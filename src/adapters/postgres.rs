use crate::adapters::queries::SeasonQuery;
use crate::config::database::DatabaseConfig;
use crate::core::{EntityKind, ResultRow, ResultStore, RowSource, Season};
use crate::utils::error::{DashboardError, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// 以連線池存取的 Postgres 成績資料庫，只讀
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// 連線失敗回傳 `ConnectionError`，不重試
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let url = config.connection_url()?;

        tracing::info!(
            "🔌 Connecting to results store at {}:{}/{}",
            config.host,
            config.port,
            config.name
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds()))
            .connect(&url)
            .await
            .map_err(|e| DashboardError::ConnectionError {
                message: format!("{}:{}/{}: {}", config.host, config.port, config.name, e),
            })?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ResultStore for PostgresStore {
    async fn fetch_rows(
        &self,
        source: RowSource,
        kind: EntityKind,
        season: Season,
    ) -> Result<Vec<ResultRow>> {
        let sql = SeasonQuery::new(source, kind).sql();
        tracing::debug!("SQL ($1 = {}): {}", season, sql);

        let rows = sqlx::query_as::<_, ResultRow>(&sql)
            .bind(season.year())
            .fetch_all(&self.pool)
            .await?;

        checked_rows(rows)
    }
}

/// 與 CSV 讀取相同的逐列檢查
fn checked_rows(rows: Vec<ResultRow>) -> Result<Vec<ResultRow>> {
    for row in &rows {
        row.check()?;
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 需要真實資料庫：DATABASE_URL=postgres://... cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_fetch_rows_against_live_database() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.unwrap();
        let store = PostgresStore::from_pool(pool);

        let rows = store
            .fetch_rows(RowSource::Standings, EntityKind::Driver, Season::new(2021))
            .await
            .unwrap();

        assert!(rows.iter().all(|row| row.season == 2021));
        store.close().await;
    }

    fn row(rank: i32, points: f64) -> ResultRow {
        ResultRow {
            season: 2021,
            round: 1,
            entity: "Lando Norris".to_string(),
            team: Some("McLaren".to_string()),
            rank,
            points,
            win: false,
            podium: false,
            points_finish: false,
            status: String::new(),
        }
    }

    #[test]
    fn test_decoded_rows_are_checked() {
        assert_eq!(checked_rows(vec![row(1, 25.0)]).unwrap().len(), 1);

        let err = checked_rows(vec![row(1, 25.0), row(0, 10.0)]).unwrap_err();
        assert!(matches!(err, DashboardError::ProcessingError { .. }));

        assert!(checked_rows(vec![row(2, -1.0)]).is_err());
    }

    #[tokio::test]
    async fn test_connect_failure_is_connection_error() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "f1".to_string(),
            password: String::new(),
            name: "f1".to_string(),
            max_connections: Some(1),
            connect_timeout_seconds: Some(1),
        };

        let err = PostgresStore::connect(&config).await.unwrap_err();
        assert!(matches!(err, DashboardError::ConnectionError { .. }));
    }
}
