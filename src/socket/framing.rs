//! Frame layer for the identity-routed socket binding.
//!
//! Every message on the wire is three length-prefixed frames:
//!
//! ```text
//! [u32 len][identity bytes]
//! [u32 len = 0]               <- empty delimiter
//! [u32 len][payload bytes]
//! ```
//!
//! Lengths are big-endian. The delimiter frame must be empty; anything else
//! is a framing error. Losing or reordering the triple breaks delivery, so
//! replies are built through [`RoutedMessage::reply`], which carries the
//! originating identity over by construction.

use anyhow::{Context, Result, anyhow};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on a single frame, so a bad peer cannot balloon memory.
const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// One identity-routed message: whose it is and what it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedMessage {
    pub identity: Vec<u8>,
    pub payload: Vec<u8>,
}

impl RoutedMessage {
    pub fn new(identity: Vec<u8>, payload: Vec<u8>) -> Self {
        Self { identity, payload }
    }

    /// Builds the reply to this message under the originating identity.
    pub fn reply(&self, payload: Vec<u8>) -> Self {
        Self {
            identity: self.identity.clone(),
            payload,
        }
    }
}

/// Reads one `[identity, delimiter, payload]` triple from the stream.
pub async fn read_message<R>(reader: &mut R) -> Result<RoutedMessage>
where
    R: AsyncRead + Unpin,
{
    let identity = read_frame(reader)
        .await
        .context("Failed to read identity frame")?;

    let delimiter = read_frame(reader)
        .await
        .context("Failed to read delimiter frame")?;
    if !delimiter.is_empty() {
        return Err(anyhow!(
            "Delimiter frame must be empty, got {} bytes",
            delimiter.len()
        ));
    }

    let payload = read_frame(reader)
        .await
        .context("Failed to read payload frame")?;

    Ok(RoutedMessage { identity, payload })
}

/// Writes one triple to the stream and flushes it.
pub async fn write_message<W>(writer: &mut W, message: &RoutedMessage) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    write_frame(writer, &message.identity).await?;
    write_frame(writer, &[]).await?;
    write_frame(writer, &message.payload).await?;
    writer.flush().await.context("Failed to flush message")?;
    Ok(())
}

async fn read_frame<R>(reader: &mut R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let len = reader
        .read_u32()
        .await
        .context("Failed to read frame length")? as usize;

    if len > MAX_FRAME_SIZE {
        return Err(anyhow!(
            "Frame size {} exceeds maximum {} bytes",
            len,
            MAX_FRAME_SIZE
        ));
    }

    let mut frame = vec![0u8; len];
    reader
        .read_exact(&mut frame)
        .await
        .context("Failed to read frame body")?;
    Ok(frame)
}

async fn write_frame<W>(writer: &mut W, frame: &[u8]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_u32(frame.len() as u32)
        .await
        .context("Failed to write frame length")?;
    writer
        .write_all(frame)
        .await
        .context("Failed to write frame body")?;
    Ok(())
}
