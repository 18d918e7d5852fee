pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::hh::{HhClient, HhPagination, HhVacancy};
pub use adapters::superjob::{SjVacancy, SuperJobClient};
pub use config::AppConfig;
pub use crate::core::{
    engine::StatsEngine,
    report::{ReportOptions, StatTable},
};
pub use utils::error::{Result, StatsError};
