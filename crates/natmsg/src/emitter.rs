//! Typed reader/writer over frames, and one-shot emission.
//!
//! Serialization happens before any header byte touches the stream, so a
//! failed serialization never leaves a partial frame behind.

use std::io::{Read, Stdout, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use natmsg_frame::{FrameReader, FrameWriter};

use crate::error::Result;

/// Writes serde-serializable messages as framed JSON.
pub struct MessageWriter<T> {
    inner: FrameWriter<T>,
}

impl<T: Write> MessageWriter<T> {
    /// Create a message writer over any `Write` stream.
    pub fn new(inner: T) -> Self {
        Self {
            inner: FrameWriter::new(inner),
        }
    }

    /// Serialize a message to JSON, frame it, write it, and flush.
    pub fn write<M: Serialize>(&mut self, message: &M) -> Result<()> {
        let payload = serde_json::to_vec(message)?;
        self.inner.send(&payload)?;
        debug!(len = payload.len(), "emitted message");
        Ok(())
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

/// Reads framed JSON into serde-deserializable messages.
pub struct MessageReader<T> {
    inner: FrameReader<T>,
}

impl<T: Read> MessageReader<T> {
    /// Create a message reader over any `Read` stream.
    pub fn new(inner: T) -> Self {
        Self {
            inner: FrameReader::new(inner),
        }
    }

    /// Read the next frame and parse its payload.
    pub fn read<M: DeserializeOwned>(&mut self) -> Result<M> {
        let payload = self.inner.read_frame()?;
        Ok(serde_json::from_slice(&payload)?)
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

/// Emit one message to a sink: serialize, frame, write, flush.
///
/// On `Ok(())` the sink received exactly `4 + N` bytes, where `N` is the
/// byte length of the JSON document, and has been flushed.
pub fn emit<M: Serialize, W: Write>(message: &M, sink: W) -> Result<()> {
    MessageWriter::new(sink).write(message)
}

/// Emit one message on the process's standard output.
///
/// This is the host's reply path: the browser reads the frame from the other
/// end of the pipe. Exiting with status 0 afterwards is the caller's job.
pub fn emit_stdout<M: Serialize>(message: &M) -> Result<()> {
    let stdout: Stdout = std::io::stdout();
    emit(message, stdout.lock())
}
