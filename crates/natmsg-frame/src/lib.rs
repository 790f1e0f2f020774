//! Length-prefixed message framing for browser native-messaging streams.
//!
//! Every message on the wire is:
//! - A 4-byte little-endian payload length
//! - Exactly that many payload bytes
//!
//! The length prefix is always little-endian, independent of host byte order.
//! Browsers write the native order of the platforms they ship native
//! messaging on, which is little-endian across all of them; fixing the order
//! here keeps the format unambiguous without breaking existing hosts.
//!
//! No partial reads, no buffer management in user code.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_frame, encode_frame, FrameConfig, DEFAULT_MAX_PAYLOAD, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
pub use writer::FrameWriter;
