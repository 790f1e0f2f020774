//! Typed JSON messages over length-prefixed native-messaging frames.
//!
//! natmsg implements the wire contract between a browser extension and its
//! native-messaging host: every message is a 4-byte little-endian length
//! header followed by exactly that many bytes of UTF-8 JSON.
//!
//! # Crate Structure
//!
//! - [`frame`] — Byte-level framing (header encode/decode, buffering
//!   reader/writer)
//! - [`message`] — The edit-request and edit-reply records
//! - [`emitter`] — Typed reader/writer and one-shot emission helpers

pub mod emitter;
pub mod error;
pub mod message;

/// Re-export frame types.
pub mod frame {
    pub use natmsg_frame::*;
}

pub use emitter::{emit, emit_stdout, MessageReader, MessageWriter};
pub use error::{MessageError, Result};
pub use message::{Message, Reply};
