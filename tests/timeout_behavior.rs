//! Client read-timeout and disconnect behavior.
//!
//! These are the scenarios the lab exists for: a client that gives up
//! before the server finishes, and a server that keeps working anyway.

use std::time::Duration;

use tokio::io::AsyncWriteExt;

mod common;

#[tokio::test]
async fn short_read_timeout_fails_the_client_but_not_the_server() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    let impatient = reqwest::Client::builder()
        .read_timeout(Duration::from_secs(1))
        .no_proxy()
        .build()
        .unwrap();

    let error = impatient
        .get(format!("http://{addr}/sleep1?second=3"))
        .send()
        .await
        .expect_err("expected a client-side read timeout");
    assert!(error.is_timeout(), "unexpected failure kind: {error}");

    // The server completes its delay regardless of the disconnect and
    // stays healthy for later requests.
    tokio::time::sleep(Duration::from_secs(3)).await;
    let patient = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = patient
        .get(format!("http://{addr}/sleep1?second=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "ok:0");
}

#[tokio::test]
async fn disconnect_during_proxy_stream_is_not_fatal() {
    let (addr, _shutdown) = common::start_lab_server(common::fast_config()).await;

    {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "GET /proxy-sleep?second=1&loop=50000 HTTP/1.1\r\nHost: {addr}\r\n\r\n"
        );
        stream.write_all(request.as_bytes()).await.unwrap();
        // Hang up before the delayed upstream response arrives.
    }

    // The copy task hits its broken pipe; the process shrugs it off.
    tokio::time::sleep(Duration::from_secs(2)).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let res = client
        .get(format!("http://{addr}/sleep1?second=0"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.text().await.unwrap(), "ok:0");
}

#[tokio::test]
async fn shutdown_interrupts_an_inflight_delay() {
    let (addr, shutdown) = common::start_lab_server(common::fast_config()).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let pending = tokio::spawn(async move {
        client
            .get(format!("http://{addr}/sleep1?second=30"))
            .send()
            .await
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown.trigger();

    let res = pending.await.unwrap().unwrap();
    assert_eq!(res.status(), 500);
    let body = res.text().await.unwrap();
    assert!(
        body.starts_with("interrupted!!! message:"),
        "unexpected error body: {body}"
    );
}
