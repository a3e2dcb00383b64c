//! Outbound envelopes pushed to dashboard clients.

use crate::{Result as WsErrorResult, now_millis};

use sa_core::BlockInfo;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Connected to Solana Analytics WebSocket";
pub const BLOCKS_CHANNEL: &str = "blocks";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid message format";
pub const UNKNOWN_TYPE_MESSAGE: &str = "Unknown message type";

/// Absent optional fields are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Connected {
        message: String,
        timestamp: i64,
    },
    Subscribed {
        #[serde(skip_serializing_if = "Option::is_none")]
        channel: Option<String>,
        timestamp: i64,
    },
    Unsubscribed {
        #[serde(skip_serializing_if = "Option::is_none")]
        channel: Option<String>,
        timestamp: i64,
    },
    Pong {
        timestamp: i64,
    },
    Update {
        channel: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<BlockInfo>,
        timestamp: i64,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    pub fn connected() -> Self {
        Self::Connected {
            message: WELCOME_MESSAGE.to_string(),
            timestamp: now_millis(),
        }
    }

    pub fn subscribed(channel: Option<String>) -> Self {
        Self::Subscribed {
            channel,
            timestamp: now_millis(),
        }
    }

    pub fn unsubscribed(channel: Option<String>) -> Self {
        Self::Unsubscribed {
            channel,
            timestamp: now_millis(),
        }
    }

    pub fn pong() -> Self {
        Self::Pong {
            timestamp: now_millis(),
        }
    }

    pub fn block_update(block: Option<BlockInfo>) -> Self {
        Self::Update {
            channel: BLOCKS_CHANNEL.to_string(),
            data: block,
            timestamp: now_millis(),
        }
    }

    pub fn invalid_format() -> Self {
        Self::Error {
            message: INVALID_FORMAT_MESSAGE.to_string(),
        }
    }

    pub fn unknown_type() -> Self {
        Self::Error {
            message: UNKNOWN_TYPE_MESSAGE.to_string(),
        }
    }

    /// Short name used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connected { .. } => "connected",
            Self::Subscribed { .. } => "subscribed",
            Self::Unsubscribed { .. } => "unsubscribed",
            Self::Pong { .. } => "pong",
            Self::Update { .. } => "update",
            Self::Error { .. } => "error",
        }
    }

    pub fn to_json(&self) -> WsErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
