use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Report error: {message}")]
    ReportError { message: String },
}

impl StatsError {
    /// 是否為配置相關錯誤
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::MissingConfigError { .. }
                | Self::InvalidConfigValueError { .. }
        )
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) => match e.status() {
                Some(status) => format!("Vacancy service responded with HTTP {}", status),
                None if e.is_decode() => {
                    "Vacancy service returned an unexpected response body".to_string()
                }
                None => "Could not reach the vacancy service".to_string(),
            },
            Self::IoError(e) => format!("File system error: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::MissingConfigError { field } => format!("'{}' is not configured", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            Self::ReportError { message } => format!("Could not build the report: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(e) => match e.status().map(|s| s.as_u16()) {
                Some(401) | Some(403) => "Check that SJ_TOKEN holds a valid SuperJob app key",
                Some(429) => "The service is rate limiting requests, wait and run again",
                Some(_) => "Run again later or with --verbose to see the failing request",
                None => "Check your network connection and the configured endpoints",
            },
            Self::IoError(_) => "Check that the config file exists and is readable",
            Self::ConfigError { .. } => "Check the TOML syntax of the config file",
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the value in the config file or on the command line"
            }
            Self::ReportError { .. } => {
                "Run without --literal-language-key, or add \"language\" to the search terms"
            }
        }
    }

    /// 程序退出碼
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
