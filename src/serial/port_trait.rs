//! Trait abstraction for reading the telemetry byte stream to enable testing

use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Source of telemetry bytes, read one at a time
///
/// A read blocks until a byte arrives. Any error, including end-of-stream
/// (`io::ErrorKind::UnexpectedEof`), is terminal for the stream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ByteSource: Send {
    /// Read the next byte from the stream
    async fn read_byte(&mut self) -> io::Result<u8>;
}

/// Adapter reading bytes from any async reader (serial port, TCP, pipe)
pub struct StreamByteSource<R> {
    reader: R,
}

impl<R> StreamByteSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl<R> ByteSource for StreamByteSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn read_byte(&mut self) -> io::Result<u8> {
        self.reader.read_u8().await
    }
}
