use httpmock::prelude::*;
use serde_json::json;
use vacancy_stats::adapters::http_client;
use vacancy_stats::config::{HhSettings, SuperJobSettings};
use vacancy_stats::core::VacancySource;
use vacancy_stats::{HhClient, HhPagination, SuperJobClient};

fn hh_page(ids: &[&str], pages: u32) -> serde_json::Value {
    let items: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "name": format!("Vacancy {}", id), "salary": null}))
        .collect();
    json!({"pages": pages, "items": items, "found": ids.len()})
}

fn hh_client(server: &MockServer, pagination: HhPagination) -> HhClient {
    HhClient::new(
        http_client().unwrap(),
        HhSettings {
            endpoint: server.url("/vacancies"),
            pagination,
            ..HhSettings::default()
        },
    )
}

fn sj_client(server: &MockServer) -> SuperJobClient {
    SuperJobClient::new(
        http_client().unwrap(),
        SuperJobSettings {
            endpoint: server.url("/2.0/vacancies"),
            api_key: Some("test-key".to_string()),
            ..SuperJobSettings::default()
        },
    )
}

#[tokio::test]
async fn test_hh_single_pass_fetches_each_page_once() {
    let server = MockServer::start();
    let page0 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200).json_body(hh_page(&["a1", "a2"], 2));
    });
    let page1 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(200).json_body(hh_page(&["b1"], 2));
    });

    let client = hh_client(&server, HhPagination::SinglePass);
    let vacancies = client.fetch_vacancies("Python").await.unwrap();

    page0.assert_hits(1);
    page1.assert_hits(1);
    let ids: Vec<_> = vacancies.iter().filter_map(|v| v.id.as_deref()).collect();
    assert_eq!(ids, vec!["a1", "a2", "b1"]);
}

#[tokio::test]
async fn test_hh_refetch_mode_duplicates_first_page() {
    let server = MockServer::start();
    let page0 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200).json_body(hh_page(&["a1", "a2"], 2));
    });
    let page1 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(200).json_body(hh_page(&["b1"], 2));
    });

    let client = hh_client(&server, HhPagination::RefetchFirstPage);
    let vacancies = client.fetch_vacancies("Python").await.unwrap();

    page0.assert_hits(2);
    page1.assert_hits(1);
    let ids: Vec<_> = vacancies.iter().filter_map(|v| v.id.as_deref()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a1", "a2", "b1"]);
}

#[tokio::test]
async fn test_hh_error_on_later_page_propagates() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "0");
        then.status(200).json_body(hh_page(&["a1"], 3));
    });
    let page1 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "1");
        then.status(502);
    });
    let page2 = server.mock(|when, then| {
        when.method(GET).path("/vacancies").query_param("page", "2");
        then.status(200).json_body(hh_page(&["c1"], 3));
    });

    let client = hh_client(&server, HhPagination::SinglePass);
    let result = client.fetch_vacancies("Java").await;

    assert!(result.is_err());
    page1.assert_hits(1);
    page2.assert_hits(0);
}

#[tokio::test]
async fn test_superjob_stops_when_more_is_false() {
    let server = MockServer::start();
    let pages: Vec<_> = [(0, true), (1, true), (2, false)]
        .into_iter()
        .map(|(page, more)| {
            server.mock(|when, then| {
                when.method(GET)
                    .path("/2.0/vacancies")
                    .header("x-api-app-id", "test-key")
                    .query_param("page", page.to_string());
                then.status(200).json_body(json!({
                    "objects": [{"id": page, "payment_from": 100000, "payment_to": 0}],
                    "more": more,
                    "total": 3
                }));
            })
        })
        .collect();
    let beyond = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies").query_param("page", "3");
        then.status(200).json_body(json!({"objects": [], "more": false}));
    });

    let client = sj_client(&server);
    let vacancies = client.fetch_vacancies("Python").await.unwrap();

    for page in &pages {
        page.assert_hits(1);
    }
    beyond.assert_hits(0);
    let ids: Vec<_> = vacancies.iter().filter_map(|v| v.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[tokio::test]
async fn test_superjob_single_page() {
    let server = MockServer::start();
    let page0 = server.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies").query_param("page", "0");
        then.status(200).json_body(json!({"objects": [], "more": false}));
    });

    let client = sj_client(&server);
    let vacancies = client.fetch_vacancies("Haskell").await.unwrap();

    page0.assert_hits(1);
    assert!(vacancies.is_empty());
}
