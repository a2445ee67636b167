use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{APOD_PATH, run_apod, stderr};

#[tokio::test]
async fn info_prints_record_and_media_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APOD_PATH))
        .and(query_param("api_key", "cli-test-key"))
        .and(query_param("date", "2022-01-25"))
        .and(query_param("thumbs", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "date": "2022-01-25",
            "media_type": "video",
            "title": "Moon Dance",
            "explanation": "A lunar eclipse timelapse.",
            "url": "https://www.youtube.com/embed/abc",
            "thumbnail_url": "https://img.youtube.com/vi/abc/0.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_apod(&server, &["info", "--date", "2022-01-25"]).await;

    assert!(
        output.status.success(),
        "info command failed: {}",
        stderr(&output)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let data: serde_json::Value =
        serde_json::from_str(&stdout).expect("info output is not valid JSON");

    assert_eq!(data["title"], "Moon Dance");
    assert_eq!(data["media_type"], "video");
    assert_eq!(data["media_url"], "https://img.youtube.com/vi/abc/0.jpg");
}

#[tokio::test]
async fn info_fails_on_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(APOD_PATH))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let output = run_apod(&server, &["info", "--date", "1990-01-01"]).await;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("400"));
}
