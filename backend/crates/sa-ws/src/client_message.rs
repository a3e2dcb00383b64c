//! Inbound envelopes sent by dashboard clients.

use crate::{Result as WsErrorResult, WsError};

use serde::Deserialize;
use serde_json::Value;

/// A decoded inbound envelope.
///
/// Anything that is valid JSON but not one of the known control messages
/// (including non-objects and objects without a `type`) is kept as
/// `Unrecognized` so the dispatcher can answer it.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientMessage {
    Subscribe { channel: Option<String> },
    Unsubscribe { channel: Option<String> },
    Ping,
    Unrecognized(Value),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KnownMessage {
    Subscribe {
        #[serde(default)]
        payload: Option<Value>,
    },
    Unsubscribe {
        #[serde(default)]
        payload: Option<Value>,
    },
    Ping {},
}

impl ClientMessage {
    /// Decode one text frame.
    ///
    /// Fails when the text is not JSON, or when a subscribe/unsubscribe has
    /// no payload at all (absent or `null`).
    #[track_caller]
    pub fn decode(text: &str) -> WsErrorResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| WsError::invalid_message(format!("not valid JSON: {}", e)))?;

        Self::from_value(value)
    }

    #[track_caller]
    pub fn from_value(value: Value) -> WsErrorResult<Self> {
        match KnownMessage::deserialize(&value) {
            Ok(KnownMessage::Subscribe { payload }) => Ok(Self::Subscribe {
                channel: channel_of(payload, "subscribe")?,
            }),
            Ok(KnownMessage::Unsubscribe { payload }) => Ok(Self::Unsubscribe {
                channel: channel_of(payload, "unsubscribe")?,
            }),
            Ok(KnownMessage::Ping {}) => Ok(Self::Ping),
            Err(_) => Ok(Self::Unrecognized(value)),
        }
    }

    /// Short name used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Subscribe { .. } => "subscribe",
            Self::Unsubscribe { .. } => "unsubscribe",
            Self::Ping => "ping",
            Self::Unrecognized(_) => "unrecognized",
        }
    }
}

/// `payload.channel` when it is a string; any other channel counts as
/// missing. A missing payload is an error.
#[track_caller]
fn channel_of(payload: Option<Value>, kind: &str) -> WsErrorResult<Option<String>> {
    match payload {
        None | Some(Value::Null) => Err(WsError::invalid_message(format!(
            "{} without payload",
            kind
        ))),
        Some(payload) => Ok(payload
            .get("channel")
            .and_then(Value::as_str)
            .map(String::from)),
    }
}
