use crate::{ClientMessage, ServerMessage};

use log::debug;

/// Produce the reply for one inbound envelope.
///
/// Subscriptions are acknowledged only; every open connection receives every
/// broadcast regardless of channel.
pub fn dispatch(msg: ClientMessage) -> ServerMessage {
    match msg {
        ClientMessage::Subscribe { channel } => ServerMessage::subscribed(channel),
        ClientMessage::Unsubscribe { channel } => ServerMessage::unsubscribed(channel),
        ClientMessage::Ping => ServerMessage::pong(),
        ClientMessage::Unrecognized(value) => {
            debug!("Unrecognized message: {}", value);
            ServerMessage::unknown_type()
        }
    }
}

/// Decode a raw text frame and dispatch it. Text that is not JSON gets an
/// "Invalid message format" error envelope.
pub fn dispatch_text(text: &str) -> ServerMessage {
    match ClientMessage::decode(text) {
        Ok(msg) => dispatch(msg),
        Err(e) => {
            debug!("Failed to decode client message: {}", e);
            ServerMessage::invalid_format()
        }
    }
}
