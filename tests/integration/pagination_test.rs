//! Integration tests for list endpoints: the news page envelope and the
//! limit/offset windows used by vacancies and legal acts.

mod helpers;

use chrono::{DateTime, NaiveDate, Utc};
use http::StatusCode;

use helpers::{PNG_PIXEL, TestApp};
use tmsiti_entity::legal::{CreateLegalAct, LegalActKind};
use tmsiti_entity::vacancy::CreateVacancy;
use tmsiti_service::{FileUpload, RequestContext};

fn ctx() -> RequestContext {
    RequestContext::new(1, "root")
}

fn png(name: &str) -> FileUpload {
    FileUpload {
        file_name: name.to_string(),
        content_type: Some("image/png".to_string()),
        data: PNG_PIXEL.to_vec().into(),
    }
}

async fn seed_news(app: &TestApp, count: usize) {
    for i in 1..=count {
        let name = if i % 5 == 0 {
            format!("Conference report {i}")
        } else {
            format!("Bulletin {i}")
        };
        app.state
            .news
            .create(&ctx(), name, format!("Body of article {i}"), png("photo.png"))
            .await
            .unwrap();
    }
}

async fn seed_vacancies(app: &TestApp, count: usize) {
    for i in 1..=count {
        app.state
            .vacancies
            .create(
                &ctx(),
                CreateVacancy {
                    title: format!("Engineer position {i}"),
                    description: "Design and review building standards".to_string(),
                    department: "Standards".to_string(),
                    is_active: i % 3 != 0,
                },
            )
            .await
            .unwrap();
    }
}

fn created_at(value: &serde_json::Value) -> DateTime<Utc> {
    value["created_at"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_news_envelope_defaults() {
    let app = TestApp::new().await;
    seed_news(&app, 25).await;

    let response = app.get("/yangiliklar").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 25);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["per_page"], 10);
    assert_eq!(response.body["total_pages"], 3);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_news_last_and_past_end_pages() {
    let app = TestApp::new().await;
    seed_news(&app, 25).await;

    let response = app.get("/yangiliklar?page=3&per_page=10").await;
    assert_eq!(response.body["items"].as_array().unwrap().len(), 5);

    let response = app.get("/yangiliklar?page=9&per_page=10").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["items"].as_array().unwrap().is_empty());
    assert_eq!(response.body["total"], 25);
}

#[tokio::test]
async fn test_news_pages_do_not_overlap() {
    let app = TestApp::new().await;
    seed_news(&app, 12).await;

    let first = app.get("/yangiliklar?page=1&per_page=6").await;
    let second = app.get("/yangiliklar?page=2&per_page=6").await;

    let ids = |body: &serde_json::Value| {
        body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["id"].as_i64().unwrap())
            .collect::<Vec<_>>()
    };
    let mut all = ids(&first.body);
    all.extend(ids(&second.body));
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 12);
}

#[tokio::test]
async fn test_news_rejects_out_of_range_parameters() {
    let app = TestApp::new().await;

    for uri in [
        "/yangiliklar?per_page=0",
        "/yangiliklar?per_page=101",
        "/yangiliklar?page=0",
        "/yangiliklar?page=abc",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response.error_code(), "INVALID_ARGUMENT", "{uri}");
    }
}

#[tokio::test]
async fn test_news_search_filters_total() {
    let app = TestApp::new().await;
    seed_news(&app, 25).await;

    let response = app.get("/yangiliklar?q=Conference").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["total_pages"], 1);
    for item in response.body["items"].as_array().unwrap() {
        assert!(item["name"].as_str().unwrap().contains("Conference"));
    }
}

#[tokio::test]
async fn test_vacancy_window_newest_first() {
    let app = TestApp::new().await;
    seed_vacancies(&app, 15).await;

    let first = app.get("/vakansiyalar?limit=5&offset=0").await;
    let second = app.get("/vakansiyalar?limit=5&offset=5").await;
    let tail = app.get("/vakansiyalar?limit=10&offset=10").await;

    assert_eq!(first.status, StatusCode::OK);
    let mut items = first.body.as_array().unwrap().clone();
    items.extend(second.body.as_array().unwrap().iter().cloned());
    assert_eq!(items.len(), 10);
    assert_eq!(tail.body.as_array().unwrap().len(), 5);

    for pair in items.windows(2) {
        assert!(created_at(&pair[0]) >= created_at(&pair[1]));
    }
}

#[tokio::test]
async fn test_vacancy_default_window() {
    let app = TestApp::new().await;
    seed_vacancies(&app, 15).await;

    let response = app.get("/vakansiyalar").await;
    assert_eq!(response.body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_vacancy_window_bounds() {
    let app = TestApp::new().await;

    for uri in [
        "/vakansiyalar?limit=0",
        "/vakansiyalar?limit=101",
        "/vakansiyalar?offset=-1",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_vacancy_active_filter() {
    let app = TestApp::new().await;
    seed_vacancies(&app, 9).await;

    let active = app.get("/vakansiyalar?is_active=true&limit=100").await;
    let inactive = app.get("/vakansiyalar?is_active=false&limit=100").await;

    let active = active.body.as_array().unwrap();
    let inactive = inactive.body.as_array().unwrap();
    assert_eq!(active.len(), 6);
    assert_eq!(inactive.len(), 3);
    assert!(active.iter().all(|v| v["is_active"] == true));
}

#[tokio::test]
async fn test_legal_type_filter() {
    let app = TestApp::new().await;
    let kinds = [
        LegalActKind::Qonun,
        LegalActKind::Qaror,
        LegalActKind::Qaror,
        LegalActKind::Farmon,
    ];
    for (i, kind) in kinds.into_iter().enumerate() {
        app.state
            .legal_acts
            .create(
                &ctx(),
                CreateLegalAct {
                    title: format!("Regulation number {i}"),
                    kind,
                    content: "Full text of the regulation".to_string(),
                    number: format!("PQ-{i:03}"),
                    date: NaiveDate::from_ymd_opt(2024, 3, 1 + i as u32).unwrap(),
                    source: "lex.uz".to_string(),
                },
            )
            .await
            .unwrap();
    }

    let response = app.get("/qonun-qaror-farmonlar?type=Qaror").await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|a| a["type"] == "Qaror"));

    let response = app.get("/qonun-qaror-farmonlar").await;
    assert_eq!(response.body.as_array().unwrap().len(), 4);

    let response = app.get("/qonun-qaror-farmonlar?type=Buyruq").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_ARGUMENT");
}
