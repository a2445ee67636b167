use apod_desktop::domain::errors::FetchError;
use apod_desktop::infrastructure::storage::save_image;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::client_for;

const JPEG_PREFIX: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

#[tokio::test]
async fn downloaded_bytes_are_saved_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/2201/nebula_big.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(JPEG_PREFIX.to_vec()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/image/2201/nebula_big.jpg", server.uri());
    let bytes = client_for(&server).fetch_bytes(&url).await.unwrap();
    assert_eq!(bytes, JPEG_PREFIX);

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("apod.jpg");
    save_image(&bytes, &target).await.unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), JPEG_PREFIX);
}

#[tokio::test]
async fn body_is_not_validated_as_an_image() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-an-image"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain")
                .set_body_string("plain text"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/not-an-image", server.uri());
    let bytes = client_for(&server).fetch_bytes(&url).await.unwrap();

    assert_eq!(bytes, b"plain text");
}

#[tokio::test]
async fn download_failure_carries_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image/missing.jpg"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/image/missing.jpg", server.uri());
    let err = client_for(&server).fetch_bytes(&url).await.unwrap_err();

    match err {
        FetchError::Status {
            url: failed,
            status,
            reason,
        } => {
            assert_eq!(failed, url);
            assert_eq!(status, 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Nothing listens on the discard port.
    let err = client
        .fetch_bytes("http://127.0.0.1:9/apod.jpg")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }));
}
