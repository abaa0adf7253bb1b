//! Multi-write response bodies.
//!
//! # Responsibilities
//! - Back a response body with a channel so each write becomes its own
//!   body frame (one HTTP/1.1 chunk, one observable flush boundary)
//! - Turn a write against a hung-up client into an I/O error instead of
//!   silently dropping the data
//!
//! When the downstream client disconnects, hyper drops the receiving half
//! and the next `BodyWriter::write` fails with `BrokenPipe`. That is the
//! exact signal the lab exists to observe.

use std::convert::Infallible;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::{Body, Bytes};
use futures_util::Stream;
use tokio::sync::mpsc;

/// Create a channel-backed response body.
///
/// `capacity` bounds how many writes may be buffered before `write`
/// suspends. Dropping the `BodyWriter` ends the body (the final flush).
pub fn channel_body(capacity: usize) -> (BodyWriter, Body) {
    let (tx, rx) = mpsc::channel(capacity);
    (BodyWriter { tx }, Body::from_stream(ChannelBody { rx }))
}

/// Writing half of a channel-backed body.
pub struct BodyWriter {
    tx: mpsc::Sender<Bytes>,
}

impl BodyWriter {
    /// Queue one chunk as its own body frame.
    ///
    /// Fails with `BrokenPipe` once the response body has been dropped,
    /// i.e. the client is gone.
    pub async fn write(&self, chunk: impl Into<Bytes>) -> io::Result<()> {
        self.tx.send(chunk.into()).await.map_err(|_| {
            io::Error::new(io::ErrorKind::BrokenPipe, "response body receiver dropped")
        })
    }
}

struct ChannelBody {
    rx: mpsc::Receiver<Bytes>,
}

impl Stream for ChannelBody {
    type Item = Result<Bytes, Infallible>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx).map(|chunk| chunk.map(Ok))
    }
}
