use crate::adapters::hh::HhPagination;
use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average programming salaries in Moscow from hh.ru and SuperJob")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Languages to search for, overrides the config file
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// SuperJob app key
    #[arg(long, env = "SJ_TOKEN", hide_env_values = true)]
    pub sj_token: Option<String>,

    /// Fetch hh page 0 twice, as the old script did
    #[arg(long)]
    pub hh_refetch_first_page: bool,

    /// Compute every row from the literal "language" key, as the old script did
    #[arg(long)]
    pub literal_language_key: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 載入配置檔 (若有)，再套用命令列覆蓋設定
    pub fn load_app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if !self.languages.is_empty() {
            config.report.languages = self.languages.clone();
        }
        if let Some(token) = &self.sj_token {
            config.superjob.api_key = Some(token.clone());
        }
        if self.hh_refetch_first_page {
            config.hh.pagination = HhPagination::RefetchFirstPage;
            tracing::info!("🔧 hh pagination overridden to refetch the first page");
        }
        if self.literal_language_key {
            config.report.literal_language_key = true;
            tracing::info!("🔧 Reporting rows from the literal \"language\" key");
        }
    }
}
