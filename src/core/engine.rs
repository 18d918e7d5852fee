use crate::adapters::hh::HhClient;
use crate::adapters::superjob::SuperJobClient;
use crate::adapters::http_client;
use crate::config::toml_config::AppConfig;
use crate::core::aggregator::aggregate_language_vacancies;
use crate::core::report::{build_stat_table, ReportOptions, StatTable};
use crate::core::salary::predict_posting_salary;
use crate::domain::ports::{SalaryBounds, VacancySource};
use crate::utils::error::Result;

/// 依序彙整兩個來源，兩邊都成功後才產生表格
pub struct StatsEngine<A, B> {
    first: A,
    first_title: String,
    second: B,
    second_title: String,
    languages: Vec<String>,
    options: ReportOptions,
}

impl StatsEngine<HhClient, SuperJobClient> {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = http_client()?;
        Ok(Self::new(
            (
                HhClient::new(client.clone(), config.hh.clone()),
                config.hh.title.clone(),
            ),
            (
                SuperJobClient::new(client, config.superjob.clone()),
                config.superjob.title.clone(),
            ),
            config.report.languages.clone(),
            ReportOptions {
                literal_language_key: config.report.literal_language_key,
            },
        ))
    }
}

impl<A, B> StatsEngine<A, B>
where
    A: VacancySource,
    A::Posting: SalaryBounds,
    B: VacancySource,
    B::Posting: SalaryBounds,
{
    pub fn new(
        first: (A, String),
        second: (B, String),
        languages: Vec<String>,
        options: ReportOptions,
    ) -> Self {
        Self {
            first: first.0,
            first_title: first.1,
            second: second.0,
            second_title: second.1,
            languages,
            options,
        }
    }

    pub async fn run(&self) -> Result<Vec<StatTable>> {
        tracing::info!(
            "🚀 Collecting vacancies for {} languages from {} and {}",
            self.languages.len(),
            self.first.name(),
            self.second.name()
        );

        let first_group = aggregate_language_vacancies(&self.first, &self.languages).await?;
        let second_group = aggregate_language_vacancies(&self.second, &self.languages).await?;

        tracing::info!(
            "✅ Collected {} vacancies from {}, {} from {}",
            first_group.total_postings(),
            self.first.name(),
            second_group.total_postings(),
            self.second.name()
        );

        Ok(vec![
            build_stat_table(
                &self.first_title,
                &first_group,
                predict_posting_salary::<A::Posting>,
                self.options,
            )?,
            build_stat_table(
                &self.second_title,
                &second_group,
                predict_posting_salary::<B::Posting>,
                self.options,
            )?,
        ])
    }
}
