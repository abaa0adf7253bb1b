//! Endpoint behavior tests for the delay server.

use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};

mod common;

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn sleep1_returns_ok_after_delay() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let started = Instant::now();
    let res = client()
        .get(format!("http://{addr}/sleep1?second=1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "ok:1");

    let elapsed = started.elapsed();
    assert!(
        elapsed >= Duration::from_secs(1),
        "returned before the delay elapsed: {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_secs(3),
        "delay overhead too large: {elapsed:?}"
    );
}

#[tokio::test]
async fn sleep1_uses_configured_default_delay() {
    // fast_config sets the default delay to 1 second
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let res = client()
        .get(format!("http://{addr}/sleep1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "ok:1");
}

#[tokio::test]
async fn sleep1_rejects_non_numeric_second() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let res = client()
        .get(format!("http://{addr}/sleep1?second=abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn sleep2_body_concatenates_both_writes() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let res = client()
        .get(format!("http://{addr}/sleep2?second=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "ok:0ok2:0");
}

#[tokio::test]
async fn sleep2_streams_two_separate_chunks() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    // Raw socket so the HTTP/1.1 chunk boundaries are visible.
    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    let request =
        format!("GET /sleep2?second=0 HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8_lossy(&raw);

    assert!(text.starts_with("HTTP/1.1 200"), "{text}");
    // One chunk per flushed write
    assert!(
        text.contains("\r\nok:0\r\n"),
        "first write is not its own chunk: {text}"
    );
    assert!(
        text.contains("\r\nok2:0\r\n"),
        "second write is not its own chunk: {text}"
    );
}

#[tokio::test]
async fn sleep3_builds_indexed_body_in_order() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let res = client()
        .get(format!("http://{addr}/sleep3?second=0&loop=5"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let mut expected = String::from("ok:Hello, World@");
    for i in 1..=5 {
        expected.push_str(&format!("Hello, World:{i}"));
    }
    assert_eq!(res.text().await.unwrap(), expected);
}

#[tokio::test]
async fn sleep3_accepts_zero_loop() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let res = client()
        .get(format!("http://{addr}/sleep3?second=0&loop=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "ok:Hello, World@");
}

#[tokio::test]
async fn sleep_proxied_builds_literal_body() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let res = client()
        .get(format!("http://{addr}/sleep-proxied?second=0&loop=3"))
        .send()
        .await
        .unwrap();
    assert_eq!(
        res.text().await.unwrap(),
        "ok:sleep-proxied:1-sleep-proxied:2sleep-proxied:2sleep-proxied:2"
    );
}

#[tokio::test]
async fn proxy_sleep_streams_the_proxied_body() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let direct = client()
        .get(format!("http://{addr}/sleep-proxied?second=0&loop=4"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let res = client()
        .get(format!("http://{addr}/proxy-sleep?second=0&loop=4"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), direct);
}
