use crate::types::PriceUpdate;
use futures_util::SinkExt;
use reqwest::Client;
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async, tungstenite::protocol::Message, MaybeTlsStream, WebSocketStream,
};
use tracing::info;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("websocket send failed: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Pluggable delivery of a changed price to an external endpoint.
///
/// Side-effecting only: the watcher never consumes a response payload, and a
/// failed send is logged by the caller and dropped, never retried.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&mut self, price: f64) -> Result<(), SendError>;
}

/// Persistent channel: one UTF-8 decimal text frame per detected change.
/// No acknowledgment protocol, no reconnect on failure.
pub struct WebSocketTransport {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketTransport {
    pub async fn connect(url: &str) -> Result<Self, SendError> {
        let (stream, _) = connect_async(url).await?;
        info!("Connected to backend at {}", url);
        Ok(Self { stream })
    }
}

impl Transport for WebSocketTransport {
    async fn send(&mut self, price: f64) -> Result<(), SendError> {
        self.stream.send(Message::Text(price.to_string())).await?;
        Ok(())
    }
}

/// JSON POST: body {"price": <number>}, response ignored except for
/// failure logging.
pub struct HttpPostTransport {
    client: Client,
    url: String,
}

impl HttpPostTransport {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

impl Transport for HttpPostTransport {
    async fn send(&mut self, price: f64) -> Result<(), SendError> {
        self.client
            .post(&self.url)
            .json(&PriceUpdate { price })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Fire-and-forget GET: price encoded as ?price=<value>, response
/// intentionally not read.
pub struct HttpGetTransport {
    client: Client,
    url: String,
}

impl HttpGetTransport {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
        }
    }
}

impl Transport for HttpGetTransport {
    async fn send(&mut self, price: f64) -> Result<(), SendError> {
        self.client
            .get(&self.url)
            .query(&[("price", price)])
            .send()
            .await?;
        Ok(())
    }
}
