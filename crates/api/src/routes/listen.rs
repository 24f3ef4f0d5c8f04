//! Change feed: one SSE frame per committed mutation, preceded by a
//! welcome frame. Consumers re-fetch `/v1/content` on any change event.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use axum::routing::get;
use axum::Router;
use futures_util::stream::{self, Stream, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use venue_cms_core::events::types::ContentEvent;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/listen", get(listen))
}

async fn listen(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.store().subscribe();

    let welcome = stream::iter([frame(&ContentEvent::Welcome)]);
    let changes = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => return Some((frame(&event), rx)),
                Err(RecvError::Lagged(skipped)) => {
                    // The consumer re-reads the whole document anyway, so
                    // dropped frames only cost an extra fetch.
                    tracing::warn!(skipped, "listener lagged behind the event bus");
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(welcome.chain(changes)).keep_alive(KeepAlive::default())
}

fn frame(event: &ContentEvent) -> Result<SseEvent, Infallible> {
    Ok(SseEvent::default()
        .json_data(event)
        .unwrap_or_else(|_| SseEvent::default().data("{}")))
}
