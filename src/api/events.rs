//! Server-sent completion notifications

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

/// Stream of `completion` events, one per finished print
#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    responses(
        (status = 200, description = "text/event-stream of CompletionEvent", content_type = "text/event-stream", body = crate::models::CompletionEvent)
    )
)]
pub async fn completion_events(
    State(state): State<crate::AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.services.notifications.subscribe()).filter_map(
        |message| match message {
            Ok(event) => Event::default()
                .event("completion")
                .json_data(&event)
                .ok()
                .map(Ok),
            Err(lagged) => {
                tracing::warn!("Notification subscriber fell behind: {}", lagged);
                None
            }
        },
    );

    Sse::new(stream).keep_alive(KeepAlive::default())
}
