use crate::core::{ConfigProvider, SeasonReport, Storage};
use crate::utils::error::{DashboardError, Result};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const DEFAULT_FILENAME_TEMPLATE: &str = "f1_{entity}_{season}.zip";

const STANDINGS_HEADER: [&str; 3] = ["entity", "team", "points"];
const EVOLUTION_HEADER: [&str; 3] = ["round", "entity", "rank"];
const PERFORMANCE_HEADER: [&str; 3] = ["entity", "metric", "count"];

/// 將賽季報表打包成 ZIP (CSV / JSON) 寫入 storage
pub struct ReportWriter<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportWriter<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn filename_for(&self, report: &SeasonReport) -> String {
        self.config
            .filename_template()
            .replace("{season}", &report.season.to_string())
            .replace("{entity}", report.entity_kind.as_str())
    }

    /// 回傳寫入的完整路徑
    pub async fn write(&self, report: &SeasonReport) -> Result<String> {
        let filename = self.filename_for(report);
        let formats = self.config.output_formats();
        let wants = |format: &str| formats.iter().any(|f| f == format);

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            if wants("csv") {
                zip.start_file::<_, ()>("standings.csv", FileOptions::default())?;
                zip.write_all(&to_csv(&STANDINGS_HEADER, &report.standings)?)?;

                zip.start_file::<_, ()>("evolution.csv", FileOptions::default())?;
                zip.write_all(&to_csv(&EVOLUTION_HEADER, &report.evolution)?)?;

                zip.start_file::<_, ()>("performance.csv", FileOptions::default())?;
                zip.write_all(&to_csv(&PERFORMANCE_HEADER, &report.performance)?)?;
            }

            if wants("json") {
                zip.start_file::<_, ()>("report.json", FileOptions::default())?;
                let json_data = serde_json::to_string_pretty(report)?;
                zip.write_all(json_data.as_bytes())?;
            }

            zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
            let manifest = serde_json::json!({
                "season": report.season,
                "entity_kind": report.entity_kind,
                "rows": {
                    "standings": report.standings.len(),
                    "evolution": report.evolution.len(),
                    "performance": report.performance.len(),
                },
                "formats": formats,
                "generated_at": chrono::Utc::now().to_rfc3339(),
            });
            zip.write_all(serde_json::to_string_pretty(&manifest)?.as_bytes())?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing {} ({} bytes) to storage", filename, zip_data.len());
        self.storage.write_file(&filename, &zip_data).await?;

        let output_path = format!("{}/{}", self.config.output_path(), filename);
        tracing::info!("📁 Report saved to: {}", output_path);
        Ok(output_path)
    }
}

// 沒有資料時也保留標題列
fn to_csv<T: Serialize>(header: &[&str], rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| DashboardError::ProcessingError {
            message: format!("Failed to flush CSV buffer: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityKind, EvolutionPoint, Metric, PerformanceCount, Season, StandingsRow};
    use std::collections::HashMap;
    use std::io::Read;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DashboardError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        output_formats: Vec<String>,
    }

    impl ConfigProvider for MockConfig {
        fn output_path(&self) -> &str {
            "./out"
        }

        fn output_formats(&self) -> &[String] {
            &self.output_formats
        }

        fn filename_template(&self) -> &str {
            DEFAULT_FILENAME_TEMPLATE
        }
    }

    fn report() -> SeasonReport {
        SeasonReport {
            season: Season::new(2010),
            entity_kind: EntityKind::Driver,
            standings: vec![StandingsRow {
                entity: "Vettel".to_string(),
                team: Some("Red Bull".to_string()),
                points: 256.0,
            }],
            evolution: vec![EvolutionPoint {
                round: 1,
                entity: "Vettel".to_string(),
                rank: 4,
            }],
            performance: vec![PerformanceCount {
                entity: "Vettel".to_string(),
                metric: Metric::PointsFinishes,
                count: 15,
            }],
        }
    }

    fn read_entry(zip_data: Vec<u8>, name: &str) -> Option<String> {
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        let mut file = archive.by_name(name).ok()?;
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        Some(content)
    }

    #[tokio::test]
    async fn test_write_csv_bundle() {
        let storage = MockStorage::new();
        let writer = ReportWriter::new(
            storage.clone(),
            MockConfig {
                output_formats: vec!["csv".to_string()],
            },
        );

        let path = writer.write(&report()).await.unwrap();
        assert_eq!(path, "./out/f1_driver_2010.zip");

        let data = storage.get_file("f1_driver_2010.zip").await.unwrap();
        let standings = read_entry(data.clone(), "standings.csv").unwrap();
        assert_eq!(standings, "entity,team,points\nVettel,Red Bull,256.0\n");

        let performance = read_entry(data.clone(), "performance.csv").unwrap();
        assert!(performance.contains("Vettel,finishes_in_points,15"));

        assert!(read_entry(data.clone(), "manifest.json").is_some());
        assert!(read_entry(data, "report.json").is_none());
    }

    #[tokio::test]
    async fn test_empty_report_keeps_headers() {
        let storage = MockStorage::new();
        let writer = ReportWriter::new(
            storage.clone(),
            MockConfig {
                output_formats: vec!["csv".to_string(), "json".to_string()],
            },
        );

        let empty = SeasonReport::empty(Season::new(1999), EntityKind::Constructor);
        writer.write(&empty).await.unwrap();

        let data = storage.get_file("f1_constructor_1999.zip").await.unwrap();
        assert_eq!(read_entry(data.clone(), "evolution.csv").unwrap(), "round,entity,rank\n");

        let json: serde_json::Value =
            serde_json::from_str(&read_entry(data, "report.json").unwrap()).unwrap();
        assert_eq!(json["season"], 1999);
        assert_eq!(json["entity_kind"], "constructor");
        assert!(json["standings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_back_missing_file() {
        let storage = MockStorage::new();
        assert!(storage.read_file("nope.zip").await.is_err());
    }
}
