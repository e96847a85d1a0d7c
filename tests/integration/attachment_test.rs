//! Integration tests for resources with file attachments: standards
//! carrying a PDF and the staff directory with optional portraits.

mod helpers;

use http::StatusCode;

use helpers::{PDF_DOC, PNG_PIXEL, Part, Payload, TestApp};

const PLACEHOLDER: &str = "/static/images/default.png";

fn standard_parts(name: &str, pdf: Option<(&str, &str, &[u8])>) -> Payload {
    let mut parts = vec![
        Part::text("name", name),
        Part::text("description", "Loads and actions on buildings"),
    ];
    if let Some((file_name, content_type, data)) = pdf {
        parts.push(Part::file("pdf", file_name, content_type, data));
    }
    Payload::Multipart(parts)
}

fn staff_parts(full_name: &str, image: Option<(&str, &str, &[u8])>) -> Payload {
    let mut parts = vec![
        Part::text("position", "Director"),
        Part::text("full_name", full_name),
        Part::text("reception_days", "Monday, Wednesday 10:00-12:00"),
        Part::text("phone", "+998 71 244 00 00"),
        Part::text("email", "info@tmsiti.uz"),
        Part::text("specialization", "Structural engineering"),
    ];
    if let Some((file_name, content_type, data)) = image {
        parts.push(Part::file("image", file_name, content_type, data));
    }
    Payload::Multipart(parts)
}

#[tokio::test]
async fn test_standard_pdf_lifecycle() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let created = app
        .request(
            "POST",
            "/standartlar/for_admin/",
            standard_parts(
                "KMK 2.01.07-96",
                Some(("kmk 2.01.07.pdf", "application/pdf", PDF_DOC)),
            ),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let id = created.body["id"].as_i64().unwrap();
    let first_path = created.body["pdf_path"].as_str().unwrap().to_string();
    assert!(first_path.starts_with("/static/pdfs/"));
    assert_eq!(app.stored_documents().len(), 1);

    let served = app.get(&first_path).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.raw, PDF_DOC);

    let listed = app.get("/standartlar").await;
    assert_eq!(listed.body["total"], 1);
    assert_eq!(listed.body["items"][0]["pdf_path"], first_path.as_str());

    let replaced = app
        .request(
            "PUT",
            &format!("/standartlar/{id}/for_admin/"),
            Payload::Multipart(vec![Part::file(
                "pdf",
                "revised.pdf",
                "application/pdf",
                PDF_DOC,
            )]),
            Some(&token),
        )
        .await;
    assert_eq!(replaced.status, StatusCode::OK);
    let second_path = replaced.body["pdf_path"].as_str().unwrap().to_string();
    assert_ne!(second_path, first_path);
    assert_eq!(replaced.body["name"], "KMK 2.01.07-96");
    assert_eq!(replaced.body["description"], "Loads and actions on buildings");
    assert_eq!(app.stored_documents().len(), 1);
    assert_eq!(app.get(&first_path).await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get(&second_path).await.status, StatusCode::OK);

    let deleted = app
        .request(
            "DELETE",
            &format!("/standartlar/{id}/for_admin/"),
            Payload::Empty,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["message"], "Standard deleted");
    assert!(app.stored_documents().is_empty());
    assert_eq!(
        app.get(&format!("/standartlar/{id}")).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_standard_rejects_non_pdf() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let response = app
        .request(
            "POST",
            "/standartlar/for_admin/",
            standard_parts("KMK 2.01.07-96", Some(("scan.png", "image/png", PNG_PIXEL))),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_ARGUMENT");
    assert!(app.stored_documents().is_empty());
    assert!(app.stored_images().is_empty());
    assert_eq!(app.get("/standartlar").await.body["total"], 0);
}

#[tokio::test]
async fn test_standard_field_validation() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let without_pdf = app
        .request(
            "POST",
            "/standartlar/for_admin/",
            standard_parts("KMK 2.01.07-96", None),
            Some(&token),
        )
        .await;
    assert_eq!(without_pdf.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(without_pdf.body["message"], "Field 'pdf' is required");

    let long_name = "N".repeat(256);
    let too_long = app
        .request(
            "POST",
            "/standartlar/for_admin/",
            standard_parts(&long_name, Some(("a.pdf", "application/pdf", PDF_DOC))),
            Some(&token),
        )
        .await;
    assert_eq!(too_long.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.stored_documents().is_empty());

    let anonymous = app
        .request(
            "POST",
            "/standartlar/for_admin/",
            standard_parts("KMK 2.01.07-96", Some(("a.pdf", "application/pdf", PDF_DOC))),
            None,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert!(app.stored_documents().is_empty());
}

#[tokio::test]
async fn test_staff_without_portrait_uses_placeholder() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let created = app
        .request(
            "POST",
            "/rahbariyat/for_admin/",
            staff_parts("Aziz Karimov", None),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["image_path"], PLACEHOLDER);
    assert_eq!(created.body["reception_days"], "Monday, Wednesday 10:00-12:00");
    assert!(app.stored_images().is_empty());

    let listed = app.get("/rahbariyat").await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);
    assert_eq!(listed.body[0]["full_name"], "Aziz Karimov");
}

#[tokio::test]
async fn test_staff_portrait_replace_and_delete() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let created = app
        .request(
            "POST",
            "/rahbariyat/for_admin/",
            staff_parts("Aziz Karimov", None),
            Some(&token),
        )
        .await;
    let id = created.body["id"].as_i64().unwrap();

    let with_photo = app
        .request(
            "PUT",
            &format!("/rahbariyat/{id}/for_admin/"),
            Payload::Multipart(vec![
                Part::text("position", "Deputy director"),
                Part::file("image", "portrait.png", "image/png", PNG_PIXEL),
            ]),
            Some(&token),
        )
        .await;
    assert_eq!(with_photo.status, StatusCode::OK);
    assert_eq!(with_photo.body["position"], "Deputy director");
    assert_eq!(with_photo.body["email"], "info@tmsiti.uz");
    let first_photo = with_photo.body["image_path"].as_str().unwrap().to_string();
    assert!(first_photo.starts_with("/static/images/"));
    assert_ne!(first_photo, PLACEHOLDER);
    assert_eq!(app.stored_images().len(), 1);

    let replaced = app
        .request(
            "PUT",
            &format!("/rahbariyat/{id}/for_admin/"),
            Payload::Multipart(vec![Part::file("image", "new.png", "image/png", PNG_PIXEL)]),
            Some(&token),
        )
        .await;
    let second_photo = replaced.body["image_path"].as_str().unwrap().to_string();
    assert_ne!(second_photo, first_photo);
    assert_eq!(app.stored_images().len(), 1);
    assert_eq!(app.get(&first_photo).await.status, StatusCode::NOT_FOUND);

    let deleted = app
        .request(
            "DELETE",
            &format!("/rahbariyat/{id}/for_admin/"),
            Payload::Empty,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.body["message"], "Staff member deleted");
    assert!(app.stored_images().is_empty());
    assert!(app.get("/rahbariyat").await.body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_staff_validation() {
    let app = TestApp::new().await;
    let token = app.login_root().await;

    let missing_phone = app
        .request(
            "POST",
            "/rahbariyat/for_admin/",
            Payload::Multipart(vec![
                Part::text("position", "Director"),
                Part::text("full_name", "Aziz Karimov"),
            ]),
            Some(&token),
        )
        .await;
    assert_eq!(missing_phone.status, StatusCode::UNPROCESSABLE_ENTITY);

    let bad_photo = app
        .request(
            "POST",
            "/rahbariyat/for_admin/",
            staff_parts("Aziz Karimov", Some(("cv.pdf", "application/pdf", PDF_DOC))),
            Some(&token),
        )
        .await;
    assert_eq!(bad_photo.status, StatusCode::BAD_REQUEST);
    assert!(app.stored_images().is_empty());
    assert!(app.stored_documents().is_empty());

    let missing = app
        .request(
            "PUT",
            "/rahbariyat/404/for_admin/",
            staff_parts("Nobody", None),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
