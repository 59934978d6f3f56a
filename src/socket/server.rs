use super::framing;
use super::protocol::Envelope;
use crate::router::core::RequestRouter;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;

/// Runs the socket binding until the shutdown channel flips.
///
/// One dedicated loop owns the listener; every accepted connection gets its
/// own task reading `[identity, delimiter, payload]` triples and writing the
/// reply back under the originating identity. Cancellation stops accepting,
/// abandons at most the in-flight receive on each connection, and drops the
/// sockets on the way out.
pub async fn run(
    listener: TcpListener,
    router: Arc<RequestRouter>,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    tracing::info!("Socket server listening on {}", listener.local_addr()?);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        tracing::debug!("Accepted socket connection from {}", peer);
                        let router = router.clone();
                        let shutdown = shutdown.clone();
                        tokio::spawn(async move {
                            handle_connection(stream, router, shutdown).await;
                        });
                    }
                    Err(e) => {
                        tracing::error!("Failed to accept connection: {}", e);
                        tokio::time::sleep(Duration::from_millis(100)).await;
                    }
                }
            }
            _ = shutdown.changed() => {
                tracing::info!("Socket server shutting down");
                return Ok(());
            }
        }
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    router: Arc<RequestRouter>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        let message = tokio::select! {
            read = framing::read_message(&mut stream) => read,
            _ = shutdown.changed() => return,
        };

        let message = match message {
            Ok(message) => message,
            Err(e) => {
                if is_disconnect(&e) {
                    tracing::debug!("Socket connection closed");
                } else {
                    tracing::warn!("Dropping socket connection: {}", e);
                }
                return;
            }
        };

        // Undecodable payloads are a transport-level problem: log and move
        // on without a reply, the connection itself stays usable.
        let envelope = match Envelope::from_bytes(&message.payload) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("Discarding undecodable payload: {}", e);
                continue;
            }
        };

        let Some(reply) = dispatch(&router, envelope) else {
            continue;
        };

        match reply.to_bytes() {
            Ok(payload) => {
                if let Err(e) = framing::write_message(&mut stream, &message.reply(payload)).await {
                    tracing::warn!("Failed to write reply: {}", e);
                    return;
                }
            }
            Err(e) => tracing::error!("Failed to encode reply: {}", e),
        }
    }
}

/// Maps a request envelope to its reply. Reply-kind envelopes have no
/// meaning inbound and yield `None`.
fn dispatch(router: &RequestRouter, envelope: Envelope) -> Option<Envelope> {
    match envelope {
        Envelope::Index {
            client_id,
            file_path,
            words,
        } => {
            tracing::debug!("Socket index request from {}", client_id);
            let ack = router.index_unchecked(file_path, words);
            Some(Envelope::IndexReply {
                status: ack.status,
                message: ack.message,
            })
        }
        Envelope::Search { query } => {
            let results = router
                .search_unchecked(&query)
                .into_iter()
                .map(|result| (result.document_path, result.total_frequency))
                .collect();
            Some(Envelope::SearchReply { results })
        }
        other => {
            tracing::warn!("Ignoring non-request envelope: {:?}", other);
            None
        }
    }
}

fn is_disconnect(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .map(|io| io.kind() == std::io::ErrorKind::UnexpectedEof)
            .unwrap_or(false)
    })
}
