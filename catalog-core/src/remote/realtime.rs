//! Realtime change feed over the hosted service's Phoenix-channel WebSocket.
//!
//! ## Protocol
//!
//! 1. Connect to `{ws-endpoint}/realtime/v1/websocket?apikey=...&vsn=1.0.0`
//! 2. Send `phx_join` on `realtime:{table}-changes` asking for
//!    `postgres_changes` on every event of `public.{table}`
//! 3. Send a `heartbeat` on the `phoenix` topic every 30 seconds
//! 4. Every `postgres_changes` message becomes a [`TableChange`]
//!
//! Messages are JSON text frames.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::{ChangeFeed, ChangeKind, RemoteError, TableChange};

/// Interval between heartbeats; the server drops silent sockets.
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);
/// Change events buffered before the pump waits on the consumer.
const FEED_BUFFER: usize = 16;
const PROTOCOL_VERSION: &str = "1.0.0";

/// A Phoenix channel frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelMessage {
    pub topic: String,
    pub event: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

/// Channel topic used for a table's change subscription.
pub fn channel_topic(table: &str) -> String {
    format!("realtime:{}-changes", table)
}

/// Builds the WebSocket URL from the project endpoint.
pub fn build_socket_url(endpoint: &str, anon_key: &str) -> String {
    let endpoint = endpoint.trim_end_matches('/');

    // Convert http(s) to ws(s) if needed
    let base_url = if let Some(rest) = endpoint.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else if let Some(rest) = endpoint.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if !endpoint.starts_with("ws://") && !endpoint.starts_with("wss://") {
        format!("wss://{}", endpoint)
    } else {
        endpoint.to_string()
    };

    format!(
        "{}/realtime/v1/websocket?apikey={}&vsn={}",
        base_url,
        urlencoding::encode(anon_key),
        PROTOCOL_VERSION
    )
}

/// The `phx_join` frame subscribing to all changes on `public.{table}`.
pub fn join_message(table: &str, reference: u64) -> ChannelMessage {
    ChannelMessage {
        topic: channel_topic(table),
        event: "phx_join".to_string(),
        payload: json!({
            "config": {
                "postgres_changes": [
                    { "event": "*", "schema": "public", "table": table }
                ]
            }
        }),
        reference: Some(reference.to_string()),
    }
}

pub fn heartbeat_message(reference: u64) -> ChannelMessage {
    ChannelMessage {
        topic: "phoenix".to_string(),
        event: "heartbeat".to_string(),
        payload: json!({}),
        reference: Some(reference.to_string()),
    }
}

/// Turns a `postgres_changes` frame into a change event. Other frames
/// (replies, presence, system messages) yield `None`.
pub fn parse_change(table: &str, message: &ChannelMessage) -> Option<TableChange> {
    if message.event != "postgres_changes" {
        return None;
    }

    let data = message.payload.get("data");
    let kind = data
        .and_then(|d| d.get("type"))
        .and_then(Value::as_str)
        .map(ChangeKind::parse)
        .unwrap_or(ChangeKind::Other);
    let changed_table = data
        .and_then(|d| d.get("table"))
        .and_then(Value::as_str)
        .unwrap_or(table);

    Some(TableChange::new(kind, changed_table))
}

/// Returns the error reason if `message` is a failed reply to our join.
fn join_error(table: &str, message: &ChannelMessage) -> Option<String> {
    if message.event != "phx_reply" || message.topic != channel_topic(table) {
        return None;
    }
    let status = message.payload.get("status").and_then(Value::as_str)?;
    if status == "ok" {
        return None;
    }
    Some(message.payload.get("response").map(Value::to_string).unwrap_or_default())
}

fn encode(message: &ChannelMessage) -> Result<Message, RemoteError> {
    let text =
        serde_json::to_string(message).map_err(|e| RemoteError::DecodeError(e.to_string()))?;
    Ok(Message::Text(text.into()))
}

/// Opens the change feed for `table`.
///
/// The connection and join happen before this returns; the socket is then
/// driven by a background task owned by the returned feed.
pub async fn connect(
    endpoint: &str,
    anon_key: &str,
    table: &str,
) -> Result<ChangeFeed, RemoteError> {
    let url = build_socket_url(endpoint, anon_key);

    let (ws_stream, _) = connect_async(url.as_str())
        .await
        .map_err(|e| RemoteError::WebSocketError(e.to_string()))?;

    let (mut sender, mut receiver) = ws_stream.split();

    let mut next_ref: u64 = 1;
    sender
        .send(encode(&join_message(table, next_ref))?)
        .await
        .map_err(|e| RemoteError::WebSocketError(e.to_string()))?;

    tracing::info!("Subscribed to change feed for table '{}'", table);

    let (tx, rx) = mpsc::channel(FEED_BUFFER);
    let table = table.to_string();

    let pump = tokio::spawn(async move {
        let mut heartbeat = tokio::time::interval(HEARTBEAT_INTERVAL);
        // The first tick completes immediately.
        heartbeat.tick().await;

        loop {
            tokio::select! {
                _ = heartbeat.tick() => {
                    next_ref += 1;
                    let frame = match encode(&heartbeat_message(next_ref)) {
                        Ok(frame) => frame,
                        Err(e) => {
                            tracing::error!("Failed to encode heartbeat: {}", e);
                            break;
                        }
                    };
                    if let Err(e) = sender.send(frame).await {
                        tracing::warn!("Change feed heartbeat failed: {}", e);
                        break;
                    }
                }
                incoming = receiver.next() => match incoming {
                    Some(Ok(Message::Text(text))) => {
                        let message: ChannelMessage = match serde_json::from_str(text.as_str()) {
                            Ok(m) => m,
                            Err(e) => {
                                tracing::debug!("Ignoring undecodable frame: {}", e);
                                continue;
                            }
                        };
                        if let Some(reason) = join_error(&table, &message) {
                            tracing::error!("Change feed join rejected: {}", reason);
                            break;
                        }
                        if let Some(change) = parse_change(&table, &message) {
                            tracing::debug!("Change feed event: {} on {}", change.kind, change.table);
                            if tx.send(change).await.is_err() {
                                // Feed dropped
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if sender.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Change feed closed by server");
                        break;
                    }
                    Some(Ok(_)) => {
                        // Ignore other message types
                    }
                    Some(Err(e)) => {
                        tracing::warn!("Change feed error: {}", e);
                        break;
                    }
                }
            }
        }

        let _ = sender.send(Message::Close(None)).await;
    });

    Ok(ChangeFeed::new(rx, Some(pump)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_url_with_https() {
        let url = build_socket_url("https://abc.supabase.co", "key");
        assert_eq!(
            url,
            "wss://abc.supabase.co/realtime/v1/websocket?apikey=key&vsn=1.0.0"
        );
    }

    #[test]
    fn test_build_socket_url_with_http() {
        let url = build_socket_url("http://localhost:54321/", "key");
        assert_eq!(
            url,
            "ws://localhost:54321/realtime/v1/websocket?apikey=key&vsn=1.0.0"
        );
    }

    #[test]
    fn test_build_socket_url_bare_host() {
        let url = build_socket_url("abc.supabase.co", "a b");
        assert_eq!(
            url,
            "wss://abc.supabase.co/realtime/v1/websocket?apikey=a%20b&vsn=1.0.0"
        );
    }

    #[test]
    fn test_join_message() {
        let msg = join_message("products", 1);
        assert_eq!(msg.topic, "realtime:products-changes");
        assert_eq!(msg.event, "phx_join");
        assert_eq!(msg.reference.as_deref(), Some("1"));

        let changes = &msg.payload["config"]["postgres_changes"][0];
        assert_eq!(changes["event"], "*");
        assert_eq!(changes["schema"], "public");
        assert_eq!(changes["table"], "products");

        let encoded = serde_json::to_value(&msg).unwrap();
        assert_eq!(encoded["ref"], "1");
    }

    #[test]
    fn test_heartbeat_message() {
        let msg = heartbeat_message(7);
        assert_eq!(msg.topic, "phoenix");
        assert_eq!(msg.event, "heartbeat");
        assert_eq!(msg.reference.as_deref(), Some("7"));
    }

    #[test]
    fn test_parse_postgres_change() {
        let frame = r#"{
            "topic": "realtime:products-changes",
            "event": "postgres_changes",
            "payload": {
                "data": {"type": "DELETE", "table": "products", "schema": "public"},
                "ids": [12]
            },
            "ref": null
        }"#;
        let message: ChannelMessage = serde_json::from_str(frame).unwrap();

        let change = parse_change("products", &message).unwrap();
        assert_eq!(change.kind, ChangeKind::Delete);
        assert_eq!(change.table, "products");
    }

    #[test]
    fn test_parse_ignores_replies() {
        let frame = r#"{
            "topic": "realtime:products-changes",
            "event": "phx_reply",
            "payload": {"status": "ok", "response": {}},
            "ref": "1"
        }"#;
        let message: ChannelMessage = serde_json::from_str(frame).unwrap();

        assert!(parse_change("products", &message).is_none());
        assert!(join_error("products", &message).is_none());
    }

    #[test]
    fn test_join_error_reply() {
        let frame = r#"{
            "topic": "realtime:products-changes",
            "event": "phx_reply",
            "payload": {"status": "error", "response": {"reason": "unauthorized"}},
            "ref": "1"
        }"#;
        let message: ChannelMessage = serde_json::from_str(frame).unwrap();

        let reason = join_error("products", &message).unwrap();
        assert!(reason.contains("unauthorized"));
    }
}
