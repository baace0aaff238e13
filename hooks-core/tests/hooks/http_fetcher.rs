use hooks_core::{FetchError, FetchStatus, Fetcher, HttpFetcher, RequestLifecycle};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn decodes_json_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "hits": [{ "title": "Rust" }] })),
        )
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new();
    let body = fetcher
        .get_json(&format!("{}/api/v1/search", mock_server.uri()))
        .await?;

    assert_eq!(body["hits"][0]["title"], "Rust");
    Ok(())
}

#[tokio::test]
async fn relative_target_uses_base_address() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::with_base(&mock_server.uri())?;
    let body = fetcher.get_json("/items").await?;

    assert_eq!(body, json!([1, 2]));
    Ok(())
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&mock_server)
        .await;

    let err = HttpFetcher::new()
        .get_json(&mock_server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() -> anyhow::Result<()> {
    // Bind and release a port so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let err = HttpFetcher::new()
        .get_json(&format!("http://{addr}/"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Network error"));
    Ok(())
}

#[tokio::test]
async fn lifecycle_over_http_fetches_once_per_target() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foo": 1 })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "bar": 2 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let lifecycle = RequestLifecycle::new(HttpFetcher::with_base(&mock_server.uri()).unwrap());
    lifecycle.set_target("/a").unwrap().await;
    lifecycle.set_target("/b").unwrap().await;
    assert!(lifecycle.set_target("/a").is_none());

    let state = lifecycle.state();
    assert_eq!(state.status, FetchStatus::Fetched);
    assert_eq!(state.data, Some(json!({ "foo": 1 })));
    // MockServer verifies the `expect(1)`s on drop.
}
