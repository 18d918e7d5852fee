pub mod aggregator;
pub mod engine;
pub mod report;
pub mod salary;

pub use crate::domain::model::{SearchTerm, StatRow, VacancyGroup};
pub use crate::domain::ports::{SalaryBounds, VacancySource};
pub use crate::utils::error::Result;
