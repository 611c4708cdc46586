//! Browser side of the composer websocket.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures_util::{SinkExt, StreamExt};
use reqwasm::websocket::{futures::WebSocket, Message};

use crate::{
    client::model::session::Session,
    model::{
        composer::Composer,
        socket::{ClientEvent, ServerEvent},
    },
};

pub const COMPOSER_SOCKET_PATH: &str = "/api/composer/ws";

fn encode(event: &ClientEvent) -> Option<String> {
    match serde_json::to_string(event) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to encode composer request: {}", e);
            None
        }
    }
}

/// Runs the composer socket for the lifetime of the page.
///
/// Outgoing requests arrive on `requests`; replies are folded into `session`
/// and `composer` as they come in.
pub async fn run_composer_socket(
    mut requests: UnboundedReceiver<ClientEvent>,
    mut session: Signal<Session>,
    mut composer: Signal<Composer>,
) {
    let socket = match WebSocket::open(COMPOSER_SOCKET_PATH) {
        Ok(socket) => socket,
        Err(e) => {
            tracing::error!("Failed to open composer socket: {:?}", e);
            session
                .write()
                .disconnect("Could not connect to the server");
            return;
        }
    };
    let (mut write, mut read) = socket.split();

    spawn(async move {
        while let Some(frame) = read.next().await {
            let text = match frame {
                Ok(Message::Text(text)) => text,
                Ok(Message::Bytes(_)) => continue,
                Err(e) => {
                    tracing::warn!("Composer socket error: {:?}", e);
                    break;
                }
            };

            match serde_json::from_str::<ServerEvent>(&text) {
                Ok(event) => session.write().apply(event, &mut composer.write()),
                Err(e) => tracing::warn!("Ignoring unreadable composer event: {}", e),
            }
        }

        session.write().disconnect("Connection to the server was lost");
    });

    let initial = session.write().initial_requests();
    for event in initial {
        let Some(json) = encode(&event) else { continue };
        if let Err(e) = write.send(Message::Text(json)).await {
            tracing::error!("Failed to send composer request: {:?}", e);
            return;
        }
    }

    while let Some(event) = requests.next().await {
        let Some(json) = encode(&event) else { continue };
        if let Err(e) = write.send(Message::Text(json)).await {
            tracing::error!("Failed to send composer request: {:?}", e);
            session.write().disconnect("Connection to the server was lost");
            break;
        }
    }
}
