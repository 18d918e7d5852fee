use crate::config::toml_config::HhSettings;
use crate::domain::ports::{SalaryBounds, VacancySource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// hh 的翻頁方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HhPagination {
    /// 每一頁只抓一次
    #[default]
    SinglePass,
    /// 先抓第 0 頁取得總頁數，再從第 0 頁重新抓到最後，第 0 頁的職缺會重複出現
    RefetchFirstPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HhVacancy {
    pub id: Option<String>,
    pub name: Option<String>,
    pub salary: Option<HhSalary>,
}

impl SalaryBounds for HhVacancy {
    fn salary_bounds(&self) -> (Option<f64>, Option<f64>) {
        match &self.salary {
            Some(salary) => (salary.from, salary.to),
            None => (None, None),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HhPage {
    pages: u32,
    items: Vec<HhVacancy>,
}

pub struct HhClient {
    client: Client,
    settings: HhSettings,
}

impl HhClient {
    pub fn new(client: Client, settings: HhSettings) -> Self {
        Self { client, settings }
    }

    async fn fetch_page(&self, term: &str, page: u32) -> Result<HhPage> {
        tracing::debug!("hh: requesting page {} for '{}'", page, term);

        let params = [
            ("text", term.to_string()),
            ("area", self.settings.area.to_string()),
            ("period", self.settings.period_days.to_string()),
            ("currency", self.settings.currency.clone()),
            ("per_page", self.settings.per_page.to_string()),
            ("page", page.to_string()),
        ];

        let response = self
            .client
            .get(&self.settings.endpoint)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl VacancySource for HhClient {
    type Posting = HhVacancy;

    fn name(&self) -> &str {
        "hh"
    }

    async fn fetch_vacancies(&self, term: &str) -> Result<Vec<HhVacancy>> {
        let first = self.fetch_page(term, 0).await?;
        let pages = first.pages;
        let mut vacancies = first.items;

        let remaining = match self.settings.pagination {
            HhPagination::SinglePass => 1..pages,
            HhPagination::RefetchFirstPage => 0..pages,
        };

        for page in remaining {
            vacancies.extend(self.fetch_page(term, page).await?.items);
        }

        tracing::debug!(
            "hh: {} vacancies for '{}' across {} pages",
            vacancies.len(),
            term,
            pages
        );
        Ok(vacancies)
    }
}
