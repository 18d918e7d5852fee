use crate::adapters::hh::HhPagination;
use crate::domain::model::DEFAULT_LANGUAGES;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HH_ENDPOINT: &str = "https://api.hh.ru/vacancies";
pub const DEFAULT_SUPERJOB_ENDPOINT: &str = "https://api.superjob.ru/2.0/vacancies";

/// hh 的莫斯科地區代碼
pub const MOSCOW_AREA: u32 = 1;
pub const MOSCOW_TOWN: &str = "Москва";
pub const PERIOD_DAYS: u32 = 30;
pub const PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub hh: HhSettings,
    pub superjob: SuperJobSettings,
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HhSettings {
    pub title: String,
    pub endpoint: String,
    pub area: u32,
    pub period_days: u32,
    pub currency: String,
    pub per_page: u32,
    pub pagination: HhPagination,
}

impl Default for HhSettings {
    fn default() -> Self {
        Self {
            title: "HH Moscow".to_string(),
            endpoint: DEFAULT_HH_ENDPOINT.to_string(),
            area: MOSCOW_AREA,
            period_days: PERIOD_DAYS,
            currency: "RUR".to_string(),
            per_page: PAGE_SIZE,
            pagination: HhPagination::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobSettings {
    pub title: String,
    pub endpoint: String,
    pub town: String,
    pub period_days: u32,
    pub count: u32,
    pub api_key: Option<String>,
}

impl Default for SuperJobSettings {
    fn default() -> Self {
        Self {
            title: "SuperJob Moscow".to_string(),
            endpoint: DEFAULT_SUPERJOB_ENDPOINT.to_string(),
            town: MOSCOW_TOWN.to_string(),
            period_days: PERIOD_DAYS,
            count: PAGE_SIZE,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub languages: Vec<String>,
    /// 每一列都從字面上的 "language" 鍵取資料，與舊版腳本的輸出一致
    pub literal_language_key: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            literal_language_key: false,
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SJ_TOKEN})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("hh.endpoint", &self.hh.endpoint)?;
        validation::validate_range("hh.per_page", self.hh.per_page, 1, 100)?;
        validation::validate_range("hh.period_days", self.hh.period_days, 1, 30)?;
        validation::validate_non_empty_string("hh.currency", &self.hh.currency)?;

        validation::validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validation::validate_range("superjob.count", self.superjob.count, 1, 100)?;
        validation::validate_range("superjob.period_days", self.superjob.period_days, 1, 30)?;
        validation::validate_non_empty_string("superjob.town", &self.superjob.town)?;

        validation::validate_terms("report.languages", &self.report.languages)?;

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
