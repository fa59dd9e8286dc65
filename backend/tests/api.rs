use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::{test, App};
use rail_qr_backend::config::AppConfig;
use rail_qr_backend::services;
use rail_qr_backend::state::AppState;
use serde_json::{json, Value};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::time::Duration;
use tempfile::TempDir;

const BOUNDARY: &str = "railqr-test-boundary";

/// Fresh state with its own upload directory, no summarizer delay and header image URLs
/// nothing listens on.
fn test_state() -> (TempDir, AppState) {
    let upload_dir = tempfile::tempdir().expect("temp upload dir");
    let config = AppConfig {
        upload_dir: upload_dir.path().to_path_buf(),
        fetch_timeout: Duration::from_secs(2),
        summary_delay: Duration::ZERO,
        emblem_url: "http://127.0.0.1:1/emblem.png".to_string(),
        logo_url: "http://127.0.0.1:1/logo.png".to_string(),
        ..AppConfig::default()
    };
    let state = AppState::from_config(config).expect("http client");
    (upload_dir, state)
}

fn multipart_body(fields: &[(&str, &str)], photo: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = photo {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn png_photo(w: u32, h: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(w, h, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 90]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn assert_complete_pdf(pdf: &[u8]) {
    assert!(pdf.starts_with(b"%PDF"));
    let tail = &pdf[pdf.len().saturating_sub(32)..];
    assert!(tail.windows(5).any(|w| w == b"%%EOF"));
}

fn multipart_request(uri: &str, body: Vec<u8>) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(body)
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().configure(|cfg| services::configure(cfg, &$state))).await
    };
}

macro_rules! install {
    ($app:expr, $fields:expr) => {{
        let req =
            multipart_request("/api/installations", multipart_body($fields, None)).to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body
    }};
}

#[actix_web::test]
async fn installation_uids_follow_name_initials_and_sequence() {
    let (_dir, state) = test_state();
    let app = app!(state);

    let first = install!(app, &[("partName", "Elastic Rail Clip"), ("batch", "B-7")]);
    assert_eq!(first["message"], "Installation saved successfully");
    assert_eq!(first["record"]["uid"], "ERC-0001");
    assert_eq!(first["record"]["id"], 1);
    assert_eq!(first["record"]["batch"], "B-7");

    let second = install!(app, &[("address", "Track Section A-12")]);
    assert_eq!(second["record"]["uid"], "P-0002");

    let third = install!(app, &[("partName", "Liner"), ("uid", "CLIENT-9999")]);
    assert_eq!(third["record"]["uid"], "L-0003");
}

#[actix_web::test]
async fn installations_are_listed_newest_first() {
    let (_dir, state) = test_state();
    let app = app!(state);

    install!(app, &[("partName", "Rail pad")]);
    install!(app, &[("partName", "Liner")]);

    let req = test::TestRequest::get().uri("/api/installations").to_request();
    let list: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let uids: Vec<&str> = list.iter().filter_map(|i| i["uid"].as_str()).collect();
    assert_eq!(uids, vec!["L-0002", "RP-0001"]);
}

#[actix_web::test]
async fn photo_is_stored_and_served() {
    let (dir, state) = test_state();
    let app = app!(state);

    let req = multipart_request(
        "/api/installations",
        multipart_body(&[("partName", "Liner")], Some(("evidence.JPG", &b"not really a jpeg"[..]))),
    )
    .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let photo = body["record"]["photo"].as_str().expect("photo path");
    assert!(photo.starts_with("uploads/"));
    assert!(photo.ends_with(".jpg"));

    let file_name = photo.rsplit('/').next().expect("file name");
    let stored = dir.path().join(file_name);
    assert_eq!(std::fs::read(&stored).expect("stored photo"), b"not really a jpeg");

    let req = test::TestRequest::get()
        .uri(&format!("/uploads/{}", file_name))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn generate_report_validates_uid_without_storing() {
    let (_dir, state) = test_state();
    let app = app!(state);
    install!(app, &[("partName", "Elastic Rail Clip")]);

    for payload in [json!({}), json!({ "uid": "" }), json!({ "uid": "   " })] {
        let req = test::TestRequest::post()
            .uri("/api/generate-report")
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "UID is required");
    }

    let req = test::TestRequest::post()
        .uri("/api/generate-report")
        .set_json(json!({ "uid": "XYZ-9999" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No installation found for UID: XYZ-9999");

    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let reports: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(reports.is_empty());
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let (_dir, state) = test_state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/generate-report")
        .insert_header((CONTENT_TYPE, "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("Invalid JSON body")));
}

#[actix_web::test]
async fn generated_report_summarizes_installation() {
    let (_dir, state) = test_state();
    let app = app!(state);
    install!(
        app,
        &[
            ("partName", "Elastic Rail Clip"),
            ("address", "Km 12"),
            ("warranty", "5 years"),
        ]
    );

    let req = test::TestRequest::post()
        .uri("/api/generate-report")
        .set_json(json!({ "uid": "ERC-0001" }))
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report["id"], 1);
    assert_eq!(report["title"], "AI Summary for ERC-0001");
    assert_eq!(report["photo"], Value::Null);

    let content = report["content"].as_str().expect("summary text");
    assert!(content.contains("ERC-0001"));
    assert!(content.contains("Part Name: Elastic Rail Clip (N/A)"));
    assert!(content.contains("Installed at: Km 12 on N/A."));
    assert!(content.contains("Warranty: 5 years"));

    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let reports: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["qrData"], "ERC-0001");
}

#[actix_web::test]
async fn scan_reports_use_known_descriptions_or_fallback() {
    let (_dir, state) = test_state();
    let app = app!(state);

    let req = multipart_request("/api/scan-report", multipart_body(&[("qrData", "RC001")], None))
        .to_request();
    let known: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(known["id"], 1);
    assert!(known["summary"]
        .as_str()
        .is_some_and(|s| s.starts_with("Part: High-tensile Rail Clip (RC001)")));

    let req = multipart_request("/api/scan-report", multipart_body(&[("qrData", "ZZ42")], None))
        .to_request();
    let unknown: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(unknown["id"], 2);
    assert_eq!(
        unknown["summary"],
        "No detailed information available for part ZZ42. The scan has been logged successfully."
    );

    let req = test::TestRequest::get().uri("/api/reports").to_request();
    let reports: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<u64> = reports.iter().filter_map(|r| r["id"].as_u64()).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[actix_web::test]
async fn download_of_unknown_report_is_not_found() {
    let (_dir, state) = test_state();
    let app = app!(state);

    for uri in ["/api/download-report/7", "/api/download-report/abc"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Report not found");
    }
}

#[actix_web::test]
async fn download_renders_pdf_even_when_header_images_fail() {
    let (_dir, state) = test_state();
    let app = app!(state);
    install!(app, &[("partName", "Elastic Rail Clip"), ("vendorNumber", "V-1")]);

    let req = test::TestRequest::post()
        .uri("/api/generate-report")
        .set_json(json!({ "uid": "ERC-0001" }))
        .to_request();
    let _: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/download-report/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/pdf")
    );
    let disposition = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("material-inspection-report-ERC-0001.pdf"));

    let pdf = test::read_body(resp).await;
    assert_complete_pdf(&pdf);
}

#[actix_web::test]
async fn download_of_multi_line_scan_gets_a_safe_file_name() {
    let (_dir, state) = test_state();
    let app = app!(state);

    let req = multipart_request(
        "/api/scan-report",
        multipart_body(&[("qrData", "BEGIN:VCARD\nFN:\"Clip\"/2")], None),
    )
    .to_request();
    let scan: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(scan["id"], 1);

    let req = test::TestRequest::get()
        .uri("/api/download-report/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("material-inspection-report-BEGIN:VCARD_FN:_Clip__2.pdf"));

    let pdf = test::read_body(resp).await;
    assert_complete_pdf(&pdf);
}

#[actix_web::test]
async fn download_includes_installation_photo_page() {
    let (_dir, state) = test_state();
    let app = app!(state);

    let photo = png_photo(320, 240);
    let req = multipart_request(
        "/api/installations",
        multipart_body(&[("partName", "Liner")], Some(("track.png", photo.as_slice()))),
    )
    .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert!(created["record"]["photo"]
        .as_str()
        .is_some_and(|p| p.starts_with("uploads/")));
    install!(app, &[("partName", "Liner")]);

    let mut pdfs = Vec::new();
    for uid in ["L-0001", "L-0002"] {
        let req = test::TestRequest::post()
            .uri("/api/generate-report")
            .set_json(json!({ "uid": uid }))
            .to_request();
        let report: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/download-report/{}", report["id"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let pdf = test::read_body(resp).await;
        assert_complete_pdf(&pdf);
        pdfs.push(pdf);
    }

    let (with_photo, without_photo) = (&pdfs[0], &pdfs[1]);
    assert!(with_photo.windows(6).any(|w| w == b"/Image"));
    assert!(with_photo.len() > without_photo.len());
}

#[actix_web::test]
async fn part_detail_and_missing_part() {
    let (_dir, state) = test_state();
    let app = app!(state);
    install!(
        app,
        &[
            ("partName", "Rail pad"),
            ("partSubType", "Grooved"),
            ("qrCode", "QR-55"),
        ]
    );

    let req = test::TestRequest::get().uri("/api/parts/RP-0001").to_request();
    let part: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(part["type"], "Rail pad (Grooved)");
    assert_eq!(part["manufacturer"], "(Not specified)");
    assert_eq!(part["status"], "Installed");
    assert_eq!(part["specifications"]["QR Code"], "QR-55");

    let req = test::TestRequest::get().uri("/api/parts/NOPE-0001").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Part not found");
}

#[actix_web::test]
async fn dashboard_reflects_installations() {
    let (_dir, state) = test_state();
    let app = app!(state);
    for n in 0..6 {
        let name = format!("Clip {}", n);
        install!(app, &[("partName", name.as_str())]);
    }

    let req = test::TestRequest::get().uri("/api/dashboard-stats").to_request();
    let cards: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(cards.len(), 4);
    assert_eq!(cards[0]["title"], "Total Parts");
    assert_eq!(cards[0]["value"], 6);
    assert_eq!(cards[3]["value"], "100%");

    let req = test::TestRequest::get().uri("/api/recent-activity").to_request();
    let activity: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(activity.len(), 5);
    assert_eq!(activity[0]["id"], 6);
    assert_eq!(activity[0]["action"], "Part Installed");
    assert_eq!(activity[0]["type"], "install");
}

#[actix_web::test]
async fn warranty_alerts_list_only_lapsing_parts() {
    let (_dir, state) = test_state();
    let app = app!(state);
    install!(
        app,
        &[
            ("partName", "Liner"),
            ("dateOfCommencement", "2000-01-01"),
            ("warranty", "1 year"),
        ]
    );
    install!(
        app,
        &[
            ("partName", "Rail pad"),
            ("dateOfCommencement", "2999-01-01"),
            ("warranty", "5 years"),
        ]
    );
    install!(app, &[("partName", "Elastic Rail Clip")]);

    let req = test::TestRequest::get().uri("/api/warranty-alerts").to_request();
    let alerts: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["uid"], "L-0001");
    assert_eq!(alerts[0]["status"], "Expired");
    assert_eq!(alerts[0]["expiryDate"], "2001-01-01");
}
