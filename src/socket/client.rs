use super::framing::{self, RoutedMessage};
use super::protocol::Envelope;
use crate::router::types::Status;
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use tokio::net::TcpStream;

/// Client for the identity-routed socket binding.
///
/// The identity frame rides along with every request and comes back on the
/// reply, so the routing layer can deliver it. A client constructed without
/// an explicit id gets a random UUID, the way an anonymous peer would be
/// labeled by a routing proxy.
pub struct SocketClient {
    stream: TcpStream,
    client_id: String,
}

impl SocketClient {
    pub async fn connect(addr: &str, client_id: Option<String>) -> Result<Self> {
        let client_id = client_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let stream = TcpStream::connect(addr).await?;
        tracing::info!("Connected to socket server at {} as {}", addr, client_id);
        Ok(Self { stream, client_id })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Submits a word-frequency table for `file_path` and awaits the ack.
    pub async fn index(
        &mut self,
        file_path: &str,
        words: HashMap<String, u64>,
    ) -> Result<(Status, String)> {
        let request = Envelope::Index {
            client_id: self.client_id.clone(),
            file_path: file_path.to_string(),
            words,
        };
        match self.round_trip(request).await? {
            Envelope::IndexReply { status, message } => Ok((status, message)),
            other => Err(anyhow!("Unexpected reply to index request: {:?}", other)),
        }
    }

    /// Runs a query and returns document path -> summed frequency.
    pub async fn search(&mut self, query: &[&str]) -> Result<HashMap<String, u64>> {
        let request = Envelope::Search {
            query: query.iter().map(|term| term.to_string()).collect(),
        };
        match self.round_trip(request).await? {
            Envelope::SearchReply { results } => Ok(results),
            other => Err(anyhow!("Unexpected reply to search request: {:?}", other)),
        }
    }

    async fn round_trip(&mut self, request: Envelope) -> Result<Envelope> {
        let message = RoutedMessage::new(self.client_id.as_bytes().to_vec(), request.to_bytes()?);
        framing::write_message(&mut self.stream, &message).await?;

        let reply = framing::read_message(&mut self.stream).await?;
        if reply.identity != message.identity {
            return Err(anyhow!("Reply routed to wrong identity"));
        }
        Ok(Envelope::from_bytes(&reply.payload)?)
    }
}
