use reqwest::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xkcd_extract::listing::fetch_listing;
use xkcd_extract::Error;

const LIST_PATH: &str = "/wiki/index.php/List_of_all_comics_(full)";

#[tokio::test]
async fn listing_body_is_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><table></table></html>", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}{LIST_PATH}", server.uri());
    let len = fetch_listing(&reqwest::Client::new(), &url)
        .await
        .expect("fetch ok");
    assert_eq!(len, "<html><table></table></html>".len());
}

#[tokio::test]
async fn listing_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let url = format!("{}{LIST_PATH}", server.uri());
    let err = fetch_listing(&reqwest::Client::new(), &url)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ListingStatus(status) if status == StatusCode::BAD_GATEWAY));
}
