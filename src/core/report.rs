use crate::domain::model::{StatRow, VacancyGroup};
use crate::utils::error::{Result, StatsError};
use crate::utils::table::{AsciiTable, Justify};

pub const TABLE_HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// 舊版腳本每一列都用這個字面鍵取資料
pub const LITERAL_LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub literal_language_key: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatTable {
    pub title: String,
    pub rows: Vec<StatRow>,
}

impl StatTable {
    pub fn to_ascii_table(&self) -> AsciiTable {
        let header = TABLE_HEADER.iter().map(|h| h.to_string()).collect();
        let mut data: Vec<Vec<String>> = vec![header];
        data.extend(self.rows.iter().map(|row| {
            vec![
                row.term.clone(),
                row.total_found.to_string(),
                row.count_with_estimate.to_string(),
                // 完整浮點數表示：150.0、100.33333333333333
                format!("{:?}", row.average_estimate),
            ]
        }));

        let mut table = AsciiTable::new(data, Some(self.title.clone()));
        table.justify_column(2, Justify::Left);
        table
    }

    pub fn render(&self) -> String {
        self.to_ascii_table().render()
    }
}

/// 計算每個關鍵字的統計列，沒有任何可估算薪資的關鍵字不會出現在結果中
///
/// 字面鍵模式下群組裡沒有 `"language"` 時回傳 `StatsError::ReportError`
pub fn build_stat_table<P, F>(
    title: &str,
    group: &VacancyGroup<P>,
    estimate: F,
    options: ReportOptions,
) -> Result<StatTable>
where
    F: Fn(&P) -> Option<i64>,
{
    if options.literal_language_key
        && !group.is_empty()
        && group.get(LITERAL_LANGUAGE_KEY).is_none()
    {
        return Err(StatsError::ReportError {
            message: format!(
                "{}: no '{}' entry to read rows from in literal key mode",
                title, LITERAL_LANGUAGE_KEY
            ),
        });
    }

    let mut rows = Vec::new();

    for (term, postings) in group.iter() {
        let postings = if options.literal_language_key {
            group.get(LITERAL_LANGUAGE_KEY).unwrap_or(&[])
        } else {
            postings
        };

        let salaries: Vec<i64> = postings.iter().filter_map(&estimate).collect();
        if salaries.is_empty() {
            tracing::debug!("{}: no salary estimates for '{}', row omitted", title, term);
            continue;
        }

        let total: i64 = salaries.iter().sum();
        rows.push(StatRow {
            term: term.to_string(),
            total_found: postings.len(),
            count_with_estimate: salaries.len(),
            average_estimate: total as f64 / salaries.len() as f64,
        });
    }

    Ok(StatTable {
        title: title.to_string(),
        rows,
    })
}
