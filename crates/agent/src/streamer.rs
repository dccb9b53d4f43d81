//! Streaming adapter.
//!
//! Turns the loop's single final response into a paced sequence of
//! `StreamEvent`s on a bounded channel. The producer runs as a
//! spawned task; a dropped receiver ends production promptly.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use writeflow_core::action::WriteAction;
use writeflow_core::error::Error;

use crate::stream_event::StreamEvent;

const CHANNEL_CAPACITY: usize = 32;

/// Split text into whitespace-delimited fragments, each carrying a
/// trailing space so the client can append them verbatim.
pub fn fragments(text: &str) -> Vec<String> {
    text.split_whitespace().map(|w| format!("{w} ")).collect()
}

/// Drive `result` to completion and deliver it as a framed event
/// sequence: one `Start`, one `Chunk` per fragment with `pacing`
/// sleeps in between, then exactly one terminal event.
///
/// An `Err` from the loop produces `Start` followed directly by a
/// terminal `Error`; no chunks are emitted for a failed request.
pub fn stream_events<F>(
    action: WriteAction,
    result: F,
    pacing: Duration,
) -> mpsc::Receiver<StreamEvent>
where
    F: Future<Output = Result<String, Error>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        if tx.send(StreamEvent::start(action)).await.is_err() {
            return;
        }

        match result.await {
            Ok(text) => {
                let parts = fragments(&text);
                debug!(action = %action, fragments = parts.len(), "Streaming response");
                for content in parts {
                    if !pacing.is_zero() {
                        tokio::time::sleep(pacing).await;
                    }
                    if tx.send(StreamEvent::Chunk { content }).await.is_err() {
                        return;
                    }
                }
                let _ = tx.send(StreamEvent::complete(action)).await;
            }
            Err(e) => {
                let _ = tx
                    .send(StreamEvent::Error {
                        message: format!("{} failed: {e}", action.title()),
                    })
                    .await;
            }
        }
    });

    rx
}
