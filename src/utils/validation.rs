use crate::utils::error::{Result, StatsError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid_value(field: &str, value: impl ToString, reason: impl Into<String>) -> StatsError {
    StatsError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 端點必須是 http(s) URL
pub fn validate_url(field: &str, endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(invalid_value(field, endpoint, "URL cannot be empty"));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| invalid_value(field, endpoint, format!("Invalid URL format: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid_value(
            field,
            endpoint,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid_value(
            field,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid_value(
            field,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// 搜尋關鍵字列表不可為空，也不可包含空白項目
pub fn validate_terms(field: &str, terms: &[String]) -> Result<()> {
    if terms.is_empty() {
        return Err(StatsError::MissingConfigError {
            field: field.to_string(),
        });
    }
    for term in terms {
        validate_non_empty_string(field, term)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("hh.endpoint", "https://api.hh.ru/vacancies").is_ok());
        assert!(validate_url("hh.endpoint", "http://127.0.0.1:8080/vacancies").is_ok());
        assert!(validate_url("hh.endpoint", "").is_err());
        assert!(validate_url("hh.endpoint", "api.hh.ru").is_err());
        assert!(validate_url("hh.endpoint", "ftp://api.hh.ru").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("hh.per_page", 50u32, 1, 100).is_ok());
        assert!(validate_range("hh.per_page", 0u32, 1, 100).is_err());
        assert!(validate_range("hh.per_page", 101u32, 1, 100).is_err());
    }

    #[test]
    fn test_invalid_value_carries_field_and_reason() {
        match validate_range("superjob.period_days", 45u32, 1, 30) {
            Err(e @ StatsError::InvalidConfigValueError { .. }) => {
                assert_eq!(
                    e.to_string(),
                    "Invalid value '45' for superjob.period_days: Value must be between 1 and 30"
                );
                assert_eq!(e.exit_code(), 1);
            }
            other => panic!("expected invalid value error, got {:?}", other),
        }

        match validate_url("superjob.endpoint", "ftp://api.superjob.ru") {
            Err(StatsError::InvalidConfigValueError { field, value, reason }) => {
                assert_eq!(field, "superjob.endpoint");
                assert_eq!(value, "ftp://api.superjob.ru");
                assert_eq!(reason, "Unsupported URL scheme: ftp");
            }
            other => panic!("expected invalid value error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_terms() {
        let terms = vec!["Python".to_string(), "Go".to_string()];
        assert!(validate_terms("report.languages", &terms).is_ok());

        assert!(matches!(
            validate_terms("report.languages", &[]),
            Err(StatsError::MissingConfigError { .. })
        ));

        let blank = vec!["Rust".to_string(), "   ".to_string()];
        assert!(validate_terms("report.languages", &blank).is_err());
    }
}
