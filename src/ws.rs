use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{WsClientMessage, WsServerMessage};
use crate::state::AppState;

const MAX_MESSAGE_LENGTH: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct WsQuery {
    pub name: Option<String>,
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    Query(query): Query<WsQuery>,
) -> impl IntoResponse {
    let user_name = query
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("guest-{}", &Uuid::new_v4().to_string()[..8]));
    ws.on_upgrade(move |socket| handle_socket(socket, state, user_name))
}

async fn handle_socket(socket: WebSocket, state: AppState, user_name: String) {
    let online = state.inc_online();
    let _ = state.global_tx.send(WsServerMessage::Presence { online });
    tracing::debug!("{user_name} connected ({online} online)");

    let (mut sender, mut receiver) = socket.split();
    let mut global_rx = state.global_tx.subscribe();

    // Fan broadcast events out to this client.
    let send_task = tokio::spawn(async move {
        while let Ok(msg) = global_rx.recv().await {
            let Ok(json) = serde_json::to_string(&msg) else {
                continue;
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(msg)) = receiver.next().await {
        let Message::Text(text) = msg else {
            continue;
        };
        let Ok(client_msg) = serde_json::from_str::<WsClientMessage>(&text) else {
            continue;
        };
        match client_msg {
            WsClientMessage::Chat { content } => {
                let content: String = content.chars().take(MAX_MESSAGE_LENGTH).collect();
                if content.trim().is_empty() {
                    continue;
                }
                let _ = state.global_tx.send(WsServerMessage::Chat {
                    user_name: user_name.clone(),
                    content,
                });
            }
        }
    }

    send_task.abort();
    let online = state.dec_online();
    let _ = state.global_tx.send(WsServerMessage::Presence { online });
    tracing::debug!("{user_name} disconnected ({online} online)");
}
