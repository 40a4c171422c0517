use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pixels_engine::{DownloadError, DownloadSettings, ImageDownloader};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

#[tokio::test]
async fn download_writes_image_under_given_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photo/sunset_150.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let downloader =
        ImageDownloader::new(dir.path().to_path_buf(), DownloadSettings::default())
            .expect("downloader");
    let url = format!("{}/photo/sunset_150.jpg", server.uri());

    let saved = downloader
        .download(&url, "sunset_150.jpg")
        .await
        .expect("download ok");

    assert_eq!(saved, dir.path().join("sunset_150.jpg"));
    assert_eq!(std::fs::read(&saved).expect("read saved file"), JPEG_BYTES);
}

#[tokio::test]
async fn download_overwrites_an_existing_copy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photo/p.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(JPEG_BYTES))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("p.jpg"), b"stale").expect("seed file");
    let downloader =
        ImageDownloader::new(dir.path().to_path_buf(), DownloadSettings::default())
            .expect("downloader");

    let saved = downloader
        .download(&format!("{}/photo/p.jpg", server.uri()), "p.jpg")
        .await
        .expect("download ok");

    assert_eq!(std::fs::read(&saved).expect("read saved file"), JPEG_BYTES);
}

#[tokio::test]
async fn download_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photo/missing.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let downloader =
        ImageDownloader::new(dir.path().to_path_buf(), DownloadSettings::default())
            .expect("downloader");

    let err = downloader
        .download(&format!("{}/photo/missing.jpg", server.uri()), "missing.jpg")
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::HttpStatus(404)));
    assert!(!dir.path().join("missing.jpg").exists());
}

#[tokio::test]
async fn download_rejects_oversized_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photo/huge.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Length", "11")
                .set_body_bytes(&b"01234567890"[..]),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let settings = DownloadSettings { max_bytes: 10 };
    let downloader =
        ImageDownloader::new(dir.path().to_path_buf(), settings).expect("downloader");

    let err = downloader
        .download(&format!("{}/photo/huge.jpg", server.uri()), "huge.jpg")
        .await
        .unwrap_err();

    assert!(matches!(err, DownloadError::TooLarge { max_bytes: 10 }));
    assert!(!dir.path().join("huge.jpg").exists());
}
