//! Integration tests for the admin-managed resources: news with images,
//! vacancies, legal acts, and the menu tree.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{PNG_PIXEL, Part, Payload, TestApp, form};

fn news_parts(name: &str, text: &str, image: Option<(&str, &str, &[u8])>) -> Payload {
    let mut parts = vec![Part::text("name", name), Part::text("text", text)];
    if let Some((file_name, content_type, data)) = image {
        parts.push(Part::file("image", file_name, content_type, data));
    }
    Payload::Multipart(parts)
}

fn vacancy_form(title: &str) -> Payload {
    form(&[
        ("title", title),
        ("description", "Prepare and review design standards"),
        ("department", "Standards"),
    ])
}

fn legal_form(kind: &str) -> Payload {
    form(&[
        ("title", "On technical regulation"),
        ("type", kind),
        ("content", "Full text of the resolution"),
        ("number", "PQ-112"),
        ("date", "2024-03-15"),
        ("source", "lex.uz"),
    ])
}

#[tokio::test]
async fn test_vacancy_lifecycle() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let created = app
        .request(
            "POST",
            "/vakansiyalar/for_admin/",
            vacancy_form("Senior structural engineer"),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["is_active"], true);
    let id = created.body["id"].as_i64().unwrap();

    let listed = app.get("/vakansiyalar").await;
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let fetched = app.get(&format!("/vakansiyalar/{id}")).await;
    assert_eq!(fetched.body["title"], "Senior structural engineer");

    let updated = app
        .request(
            "PUT",
            &format!("/vakansiyalar/{id}/for_admin/"),
            form(&[("is_active", "false")]),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["is_active"], false);
    assert_eq!(updated.body["title"], "Senior structural engineer");

    let deleted = app
        .request(
            "DELETE",
            &format!("/vakansiyalar/{id}/for_admin"),
            Payload::Empty,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Vacancy deleted");

    let missing = app.get(&format!("/vakansiyalar/{id}")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.error_code(), "NOT_FOUND");

    app.request("POST", "/admin-auth/logout", Payload::Empty, Some(&token))
        .await;
    let after_logout = app
        .request(
            "POST",
            "/vakansiyalar/for_admin/",
            vacancy_form("Junior structural engineer"),
            Some(&token),
        )
        .await;
    assert_eq!(after_logout.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_mutations_require_token() {
    let app = TestApp::new().await;

    let cases = [
        ("POST", "/vakansiyalar/for_admin/", vacancy_form("Site inspector role")),
        ("PUT", "/vakansiyalar/1/for_admin/", form(&[("title", "Renamed")])),
        ("DELETE", "/qonun-qaror-farmonlar/1/for_admin/", Payload::Empty),
        (
            "POST",
            "/yangiliklar/for_admin/",
            news_parts("Title", "Body", Some(("a.png", "image/png", PNG_PIXEL))),
        ),
        ("POST", "/menus/for_admin/", Payload::Json(json!({"title": "About"}))),
        ("DELETE", "/menus/submenus/1/for_admin/", Payload::Empty),
    ];

    for (method, uri, payload) in cases {
        let response = app.request(method, uri, payload, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
    assert!(app.stored_images().is_empty());
}

#[tokio::test]
async fn test_vacancy_validation() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/vakansiyalar/for_admin/",
            vacancy_form("Eng"),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/vakansiyalar/for_admin/",
            form(&[("title", "Structural engineer")]),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_missing_vacancy() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "PUT",
            "/vakansiyalar/999/for_admin/",
            form(&[("title", "Structural engineer")]),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_path_id() {
    let app = TestApp::new().await;

    let response = app.get("/vakansiyalar/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_legal_act_lifecycle() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let created = app
        .request(
            "POST",
            "/qonun-qaror-farmonlar/for_admin/",
            legal_form("Qaror"),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["type"], "Qaror");
    assert_eq!(created.body["date"], "2024-03-15");
    let id = created.body["id"].as_i64().unwrap();

    let updated = app
        .request(
            "PUT",
            &format!("/qonun-qaror-farmonlar/{id}/for_admin/"),
            form(&[("type", "Farmon"), ("number", "PF-7")]),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["type"], "Farmon");
    assert_eq!(updated.body["number"], "PF-7");
    assert_eq!(updated.body["source"], "lex.uz");

    let deleted = app
        .request(
            "DELETE",
            &format!("/qonun-qaror-farmonlar/{id}/for_admin/"),
            Payload::Empty,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.body["message"], "Legal act deleted");
    let missing = app.get(&format!("/qonun-qaror-farmonlar/{id}")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_legal_act_unknown_type_is_unprocessable() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/qonun-qaror-farmonlar/for_admin/",
            legal_form("Buyruq"),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let listed = app.get("/qonun-qaror-farmonlar").await;
    assert!(listed.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_news_image_is_stored_and_served() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let created = app
        .request(
            "POST",
            "/yangiliklar/for_admin/",
            news_parts(
                "New building code adopted",
                "The council adopted the revised code.",
                Some(("site photo.png", "image/png", PNG_PIXEL)),
            ),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);

    let image_path = created.body["image_path"].as_str().unwrap().to_string();
    assert!(image_path.starts_with("/static/images/"));
    assert_eq!(app.stored_images().len(), 1);

    let served = app.get(&image_path).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.raw, PNG_PIXEL);

    let id = created.body["id"].as_i64().unwrap();
    let fetched = app.get(&format!("/yangiliklar/{id}")).await;
    assert_eq!(fetched.body["image_path"], image_path.as_str());
}

#[tokio::test]
async fn test_news_update_replaces_image() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let created = app
        .request(
            "POST",
            "/yangiliklar/for_admin/",
            news_parts(
                "Seminar announced",
                "A seminar on seismic design.",
                Some(("old.png", "image/png", PNG_PIXEL)),
            ),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();
    let old_path = created.body["image_path"].as_str().unwrap().to_string();

    let renamed = app
        .request(
            "PUT",
            &format!("/yangiliklar/{id}/for_admin/"),
            Payload::Multipart(vec![Part::text("name", "Seminar rescheduled")]),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["name"], "Seminar rescheduled");
    assert_eq!(renamed.body["image_path"], old_path.as_str());

    let replaced = app
        .request(
            "PUT",
            &format!("/yangiliklar/{id}/for_admin/"),
            Payload::Multipart(vec![Part::file("image", "new.png", "image/png", PNG_PIXEL)]),
            Some(&token),
        )
        .await;
    assert_eq!(replaced.status, StatusCode::OK);
    let new_path = replaced.body["image_path"].as_str().unwrap().to_string();
    assert_ne!(new_path, old_path);
    assert_eq!(replaced.body["text"], "A seminar on seismic design.");

    let stored = app.stored_images();
    assert_eq!(stored.len(), 1);
    assert!(new_path.ends_with(stored[0].file_name().unwrap().to_str().unwrap()));
    assert_eq!(app.get(&old_path).await.status, StatusCode::NOT_FOUND);

    let deleted = app
        .request(
            "DELETE",
            &format!("/yangiliklar/{id}/for_admin/"),
            Payload::Empty,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.body["message"], "News deleted");
    assert!(app.stored_images().is_empty());
}

#[tokio::test]
async fn test_news_rejects_disallowed_image_type() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/yangiliklar/for_admin/",
            news_parts(
                "Plain text attachment",
                "Should not be stored.",
                Some(("notes.txt", "text/plain", b"hello")),
            ),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.stored_images().is_empty());
    let listed = app.get("/yangiliklar").await;
    assert_eq!(listed.body["total"], 0);
}

#[tokio::test]
async fn test_news_requires_all_fields() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let without_image = app
        .request(
            "POST",
            "/yangiliklar/for_admin/",
            news_parts("Headline", "Body", None),
            Some(&token),
        )
        .await;
    assert_eq!(without_image.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(without_image.body["message"], "Field 'image' is required");

    let blank_name = app
        .request(
            "POST",
            "/yangiliklar/for_admin/",
            news_parts("   ", "Body", Some(("a.png", "image/png", PNG_PIXEL))),
            Some(&token),
        )
        .await;
    assert_eq!(blank_name.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.stored_images().is_empty());
}

#[tokio::test]
async fn test_menu_tree_and_cascade() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let menu = app
        .request(
            "POST",
            "/menus/for_admin/",
            Payload::Json(json!({"title": "About", "url": "/about"})),
            Some(&token),
        )
        .await;
    assert_eq!(menu.status, StatusCode::OK);
    let menu_id = menu.body["id"].as_i64().unwrap();

    let mut submenu_ids = Vec::new();
    for title in ["History", "Leadership"] {
        let sub = app
            .request(
                "POST",
                "/menus/submenus/for_admin/",
                Payload::Json(json!({"title": title, "menu_id": menu_id})),
                Some(&token),
            )
            .await;
        assert_eq!(sub.status, StatusCode::OK);
        assert_eq!(sub.body["menu_id"], menu_id);
        submenu_ids.push(sub.body["id"].as_i64().unwrap());
    }

    let tree = app.get("/menus").await;
    assert_eq!(tree.status, StatusCode::OK);
    let tree = tree.body.as_array().unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["title"], "About");
    assert_eq!(tree[0]["submenus"].as_array().unwrap().len(), 2);

    let renamed = app
        .request(
            "PUT",
            &format!("/menus/submenus/{}/for_admin/", submenu_ids[0]),
            Payload::Json(json!({"title": "Our history"})),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.body["title"], "Our history");

    let single = app.get(&format!("/menus/{menu_id}")).await;
    assert_eq!(single.body["submenus"][0]["title"], "Our history");

    let deleted = app
        .request(
            "DELETE",
            &format!("/menus/{menu_id}/for_admin/"),
            Payload::Empty,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.body["message"], "Menu and its submenus deleted");

    for id in submenu_ids {
        let response = app.get(&format!("/menus/submenus/{id}")).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
    assert!(app.get("/menus").await.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_submenu_for_missing_menu() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/menus/submenus/for_admin/",
            Payload::Json(json!({"title": "Orphan", "menu_id": 42})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_menu_title_required() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/menus/for_admin/",
            Payload::Json(json!({"title": ""})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_trailing_slash_variants() {
    let app = TestApp::new().await;

    for uri in ["/yangiliklar", "/yangiliklar/", "/vakansiyalar/", "/menus/"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["storage"], "available");
}
