use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use dioxus_logger::tracing;
use futures_util::{SinkExt, StreamExt};

use crate::server::{service::composer::ComposerSession, state::AppState};

/// Upgrades to the composer websocket.
pub async fn composer_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Runs one composer session until the browser disconnects.
///
/// Frames are handled in arrival order; a send in flight finishes before the
/// next frame is read.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let session = ComposerSession::new(state.discord_http, state.guild_id, state.options);

    tracing::info!("Composer session opened");

    while let Some(frame) = receiver.next().await {
        let text = match frame {
            Ok(Message::Text(text)) => text,
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(err) => {
                tracing::warn!("Composer socket error: {}", err);
                break;
            }
        };

        let reply = session.handle_frame(text.as_str()).await;
        let json = match serde_json::to_string(&reply) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!("Failed to encode composer reply: {}", err);
                continue;
            }
        };

        if sender.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }

    tracing::info!("Composer session closed");
}
