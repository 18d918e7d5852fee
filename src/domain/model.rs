use serde::Serialize;

/// 搜尋關鍵字，這裡是程式語言名稱
pub type SearchTerm = String;

pub const DEFAULT_LANGUAGES: [&str; 3] = ["Python", "Java", "JavaScript"];

/// 依搜尋關鍵字分組的職缺，保留關鍵字的插入順序
///
/// 建立時每個關鍵字都已有一個空序列，重複的關鍵字會累加到同一個序列。
#[derive(Debug, Clone, PartialEq)]
pub struct VacancyGroup<P> {
    entries: Vec<(SearchTerm, Vec<P>)>,
}

impl<P> VacancyGroup<P> {
    pub fn new<T: AsRef<str>>(terms: &[T]) -> Self {
        let mut group = Self {
            entries: Vec::with_capacity(terms.len()),
        };
        for term in terms {
            group.ensure_term(term.as_ref());
        }
        group
    }

    fn ensure_term(&mut self, term: &str) -> usize {
        match self.position(term) {
            Some(index) => index,
            None => {
                self.entries.push((term.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        }
    }

    fn position(&self, term: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == term)
    }

    pub fn extend<I: IntoIterator<Item = P>>(&mut self, term: &str, postings: I) {
        let index = self.ensure_term(term);
        self.entries[index].1.extend(postings);
    }

    pub fn get(&self, term: &str) -> Option<&[P]> {
        self.position(term)
            .map(|index| self.entries[index].1.as_slice())
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(term, _)| term.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[P])> {
        self.entries
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全部關鍵字的職缺總數
    pub fn total_postings(&self) -> usize {
        self.entries.iter().map(|(_, postings)| postings.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    pub term: SearchTerm,
    pub total_found: usize,
    pub count_with_estimate: usize,
    pub average_estimate: f64,
}
