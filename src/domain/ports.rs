use crate::utils::error::Result;
use async_trait::async_trait;

/// 一個分頁式職缺來源，回傳某個關鍵字的全部職缺
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Posting: Send;

    /// 用於日誌的來源名稱
    fn name(&self) -> &str;

    async fn fetch_vacancies(&self, term: &str) -> Result<Vec<Self::Posting>>;
}

/// 從各來源自己的職缺格式取出薪資上下限
pub trait SalaryBounds {
    fn salary_bounds(&self) -> (Option<f64>, Option<f64>);
}
