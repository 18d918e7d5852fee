use crate::domain::model::VacancyGroup;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// 依序為每個關鍵字抓取職缺並分組，任何一次失敗即中止
pub async fn aggregate_language_vacancies<S, T>(
    source: &S,
    terms: &[T],
) -> Result<VacancyGroup<S::Posting>>
where
    S: VacancySource + ?Sized,
    T: AsRef<str>,
{
    let mut group = VacancyGroup::new(terms);

    for term in terms {
        let term = term.as_ref();
        let vacancies = source.fetch_vacancies(term).await?;
        tracing::info!(
            "🔍 {}: {} vacancies found for '{}'",
            source.name(),
            vacancies.len(),
            term
        );
        group.extend(term, vacancies);
    }

    Ok(group)
}
