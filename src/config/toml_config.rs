use crate::config::database::DatabaseConfig;
use crate::core::report::DEFAULT_FILENAME_TEMPLATE;
use crate::core::view::DEFAULT_SELECTION_SIZE;
use crate::core::{ConfigProvider, EntityKind, Season};
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_FORMATS: [&str; 2] = ["csv", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// 省略時改用 DB_* 環境變數
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub dashboard: ViewConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    pub default_season: Option<i32>,
    pub default_entity: Option<String>,
    pub selection_size: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filename: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            output_formats: vec!["csv".to_string(), "json".to_string()],
            filename: None,
        }
    }
}

impl DashboardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DB_PASSWORD})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        validation::env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 設定檔沒有 [database] 時改讀環境變數
    pub fn database(&self) -> Result<DatabaseConfig> {
        match &self.database {
            Some(database) => Ok(database.clone()),
            None => DatabaseConfig::from_env(),
        }
    }

    pub fn default_season(&self) -> Season {
        self.dashboard
            .default_season
            .map(Season::new)
            .unwrap_or(Season::LAST)
    }

    pub fn default_entity(&self) -> Result<EntityKind> {
        match &self.dashboard.default_entity {
            Some(raw) => raw.parse(),
            None => Ok(EntityKind::Driver),
        }
    }

    pub fn selection_size(&self) -> usize {
        self.dashboard
            .selection_size
            .unwrap_or(DEFAULT_SELECTION_SIZE)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(database) = &self.database {
            database.validate()?;
        }

        self.default_entity()?;

        if let Some(size) = self.dashboard.selection_size {
            validation::validate_positive_number("dashboard.selection_size", size, 1)?;
        }

        validation::validate_path("output.output_path", &self.output.output_path)?;
        validation::validate_output_formats(
            "output.output_formats",
            &self.output.output_formats,
            &SUPPORTED_FORMATS,
        )?;

        if let Some(filename) = &self.output.filename {
            validation::validate_non_empty_string("output.filename", filename)?;
        }

        Ok(())
    }
}

impl ConfigProvider for DashboardConfig {
    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn filename_template(&self) -> &str {
        self.output
            .filename
            .as_deref()
            .unwrap_or(DEFAULT_FILENAME_TEMPLATE)
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
