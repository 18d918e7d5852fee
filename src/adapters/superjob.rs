use crate::config::toml_config::SuperJobSettings;
use crate::domain::ports::{SalaryBounds, VacancySource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SjVacancy {
    pub id: Option<i64>,
    pub profession: Option<String>,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

impl SalaryBounds for SjVacancy {
    fn salary_bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.payment_from, self.payment_to)
    }
}

#[derive(Debug, Deserialize)]
struct SjPage {
    objects: Vec<SjVacancy>,
    more: bool,
}

/// SuperJob 客戶端，API key 在建立時注入
pub struct SuperJobClient {
    client: Client,
    settings: SuperJobSettings,
}

impl SuperJobClient {
    pub fn new(client: Client, settings: SuperJobSettings) -> Self {
        if settings.api_key.is_none() {
            tracing::warn!(
                "⚠️ No SuperJob API key configured, requests will be sent without {}",
                API_KEY_HEADER
            );
        }
        Self { client, settings }
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<SjPage> {
        tracing::debug!("superjob: requesting page {} for '{}'", page, term);

        let params = [
            ("keyword", term.to_string()),
            ("town", self.settings.town.clone()),
            ("period", self.settings.period_days.to_string()),
            ("count", self.settings.count.to_string()),
            ("page", page.to_string()),
        ];

        let mut request = self.client.get(&self.settings.endpoint).query(&params);
        if let Some(api_key) = &self.settings.api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl VacancySource for SuperJobClient {
    type Posting = SjVacancy;

    fn name(&self) -> &str {
        "superjob"
    }

    async fn fetch_vacancies(&self, term: &str) -> Result<Vec<SjVacancy>> {
        let mut vacancies = Vec::new();
        let mut page = 0;

        loop {
            let data = self.fetch_page(term, page).await?;
            vacancies.extend(data.objects);
            if !data.more {
                break;
            }
            page += 1;
        }

        tracing::debug!(
            "superjob: {} vacancies for '{}' across {} pages",
            vacancies.len(),
            term,
            page + 1
        );
        Ok(vacancies)
    }
}
