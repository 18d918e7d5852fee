use crate::adapters::hh::HhVacancy;
use crate::adapters::superjob::SjVacancy;
use crate::domain::ports::SalaryBounds;

/// 只有下限時上調 20%
const LOWER_ONLY_FACTOR: f64 = 1.2;
/// 只有上限時下調 20%
const UPPER_ONLY_FACTOR: f64 = 0.8;

/// 由薪資上下限估算單一薪資
///
/// 0 或負數的上下限視為未填。估算結果向下取整，結果為 0 時視為無法估算。
pub fn predict_salary(lower: Option<f64>, upper: Option<f64>) -> Option<i64> {
    let lower = lower.filter(|v| *v > 0.0);
    let upper = upper.filter(|v| *v > 0.0);

    let estimate = match (lower, upper) {
        (None, None) => return None,
        (Some(lower), Some(upper)) => (lower + upper) / 2.0,
        (Some(lower), None) => lower * LOWER_ONLY_FACTOR,
        (None, Some(upper)) => upper * UPPER_ONLY_FACTOR,
    };

    Some(estimate.floor() as i64).filter(|v| *v > 0)
}

pub fn predict_posting_salary<P: SalaryBounds>(posting: &P) -> Option<i64> {
    let (lower, upper) = posting.salary_bounds();
    predict_salary(lower, upper)
}

pub fn predict_hh_salary(vacancy: &HhVacancy) -> Option<i64> {
    predict_posting_salary(vacancy)
}

pub fn predict_sj_salary(vacancy: &SjVacancy) -> Option<i64> {
    predict_posting_salary(vacancy)
}
