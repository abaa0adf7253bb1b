//! The five delay endpoints.
//!
//! All endpoints are GET, all parameters optional. `second` defaults to the
//! configured default delay, `loop` to the configured default repetition
//! count. Handlers suspend cancellably, then answer; an interrupted suspend
//! means no body is written at all.

use std::time::Duration;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, Uri};
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;
use serde::Deserialize;

use crate::config::DelayDefaults;
use crate::delay::{suspend, Stopwatch};
use crate::http::error::HandlerError;
use crate::http::server::AppState;
use crate::http::stream::channel_body;

/// Query parameters shared by every endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DelayParams {
    pub second: Option<u64>,
    #[serde(rename = "loop")]
    pub loop_count: Option<u32>,
}

impl DelayParams {
    /// Fill in configured defaults for omitted parameters.
    fn resolve(&self, defaults: &DelayDefaults) -> (u64, u32) {
        (
            self.second.unwrap_or(defaults.default_seconds),
            self.loop_count.unwrap_or(defaults.default_loop),
        )
    }
}

/// GET /sleep1: suspend, then answer in a single write.
pub async fn sleep1(
    State(state): State<AppState>,
    Query(params): Query<DelayParams>,
) -> Result<String, HandlerError> {
    let (second, _) = params.resolve(&state.defaults);
    let _watch = Stopwatch::start("sleep1");

    tracing::info!(seconds = second, "sleep1 delay starting");
    let mut shutdown = state.shutdown.subscribe();
    suspend(Duration::from_secs(second), &mut shutdown).await?;
    tracing::info!(seconds = second, "sleep1 delay complete");

    Ok(format!("ok:{}", second))
}

/// GET /sleep2: suspend, then answer in two separately flushed writes.
///
/// Each write is queued as its own body frame, so the boundary between
/// `ok:N` and `ok2:N` is observable on the wire as two HTTP/1.1 chunks.
pub async fn sleep2(
    State(state): State<AppState>,
    Query(params): Query<DelayParams>,
) -> Result<Response, HandlerError> {
    let (second, _) = params.resolve(&state.defaults);
    let _watch = Stopwatch::start("sleep2");

    let mut shutdown = state.shutdown.subscribe();
    suspend(Duration::from_secs(second), &mut shutdown).await?;

    let (writer, body) = channel_body(2);
    writer.write(format!("ok:{}", second)).await?;
    writer.write(format!("ok2:{}", second)).await?;
    // dropping the writer here ends the body

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}

/// GET /sleep3: suspend, then answer with one large indexed body.
pub async fn sleep3(
    State(state): State<AppState>,
    Query(params): Query<DelayParams>,
) -> Result<String, HandlerError> {
    let (second, loop_count) = params.resolve(&state.defaults);
    let _watch = Stopwatch::start("sleep3");

    let mut shutdown = state.shutdown.subscribe();
    suspend(Duration::from_secs(second), &mut shutdown).await?;

    let mut builder = String::from("Hello, World@");
    for i in 1..=loop_count {
        builder.push_str("Hello, World:");
        builder.push_str(&i.to_string());
    }

    Ok(format!("ok:{}", builder))
}

/// GET /proxy-sleep: call /sleep-proxied on this same server and stream
/// the upstream body byte-for-byte into the response.
///
/// The copy runs in its own task writing through a channel-backed body; if
/// the downstream client hangs up mid-stream the write fails with a broken
/// pipe, which is logged as an I/O failure rather than swallowed.
pub async fn proxy_sleep(
    State(state): State<AppState>,
    Query(params): Query<DelayParams>,
) -> Result<Response, HandlerError> {
    let (second, loop_count) = params.resolve(&state.defaults);
    let _watch = Stopwatch::start("proxy-sleep");

    tracing::info!(seconds = second, loop_count, "proxy sleep start");

    let uri: Uri = format!(
        "http://{}/sleep-proxied?second={}&loop={}",
        state.authority, second, loop_count
    )
    .parse()
    .map_err(|e: axum::http::uri::InvalidUri| HandlerError::Other(e.to_string()))?;

    let mut req = Request::new(Body::empty());
    *req.uri_mut() = uri;
    let upstream = state.client.request(req).await?;

    let (parts, upstream_body) = upstream.into_parts();
    let mut frames = Body::new(upstream_body).into_data_stream();
    let (writer, body) = channel_body(8);

    tokio::spawn(async move {
        let _copy_watch = Stopwatch::start("proxy-sleep copy");
        while let Some(frame) = frames.next().await {
            let chunk = match frame {
                Ok(chunk) => chunk,
                Err(error) => {
                    tracing::error!(%error, "upstream body read failed mid-copy");
                    return;
                }
            };
            if let Err(error) = writer.write(chunk).await {
                tracing::error!(%error, "client write failed mid-copy");
                return;
            }
        }
        tracing::info!("proxy sleep end");
    });

    Ok(Response::from_parts(parts, body))
}

/// GET /sleep-proxied: the upstream half of the proxy pair.
pub async fn sleep_proxied(
    State(state): State<AppState>,
    Query(params): Query<DelayParams>,
) -> Result<String, HandlerError> {
    let (second, loop_count) = params.resolve(&state.defaults);
    let _watch = Stopwatch::start("sleep-proxied");

    let mut builder = String::from("sleep-proxied:1-");
    let mut shutdown = state.shutdown.subscribe();
    suspend(Duration::from_secs(second), &mut shutdown).await?;
    for _ in 0..loop_count {
        builder.push_str("sleep-proxied:2");
    }

    Ok(format!("ok:{}", builder))
}
