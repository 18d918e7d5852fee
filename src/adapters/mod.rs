// Adapters layer: HTTP clients for the external vacancy services.

pub mod hh;
pub mod superjob;

use crate::utils::error::Result;
use reqwest::Client;

pub const USER_AGENT: &str = concat!("vacancy-stats/", env!("CARGO_PKG_VERSION"));

/// 兩個來源共用的 HTTP client，hh 會拒絕沒有 User-Agent 的請求
pub fn http_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}
