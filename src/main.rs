use price_forwarder::{
    source::HtmlSource,
    transport::{HttpGetTransport, HttpPostTransport, SendError, Transport, WebSocketTransport},
    watcher::{PriceWatcher, WatcherConfig},
};
use std::{env, time::Duration};
use tracing::info;

/// The transport binding selected at startup. Each of the three variants
/// forwards the same decimal price; only the wire mechanism differs.
enum TransportBinding {
    Ws(WebSocketTransport),
    Post(HttpPostTransport),
    Get(HttpGetTransport),
}

impl Transport for TransportBinding {
    async fn send(&mut self, price: f64) -> Result<(), SendError> {
        match self {
            Self::Ws(t) => t.send(price).await,
            Self::Post(t) => t.send(price).await,
            Self::Get(t) => t.send(price).await,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("price_forwarder=info")
        .init();
    dotenvy::dotenv().ok();

    info!("==================================================");
    info!("  PRICE-FORWARDER - Rust Edition");
    info!("==================================================");

    let page_url = env::var("PAGE_URL").expect("PAGE_URL required");
    let price_class = env::var("PRICE_CLASS").unwrap_or("open-time-number".into());
    let transport_kind = env::var("TRANSPORT").unwrap_or("ws".into());
    let poll_interval_ms: u64 = env::var("POLL_INTERVAL_MS")
        .unwrap_or("500".into())
        .parse()
        .unwrap_or(500);

    info!("Page URL: {}", page_url);
    info!("Price element class: .{}", price_class);
    info!("Transport: {}", transport_kind);

    let transport = match transport_kind.as_str() {
        "ws" => {
            let ws_url = env::var("WS_URL").unwrap_or("ws://localhost:8000/ws".into());
            TransportBinding::Ws(WebSocketTransport::connect(&ws_url).await?)
        }
        "post" => {
            let post_url = env::var("POST_URL").unwrap_or("http://localhost:8000/price".into());
            TransportBinding::Post(HttpPostTransport::new(&post_url))
        }
        "get" => {
            let get_url = env::var("GET_URL").unwrap_or("http://localhost:8000/price".into());
            TransportBinding::Get(HttpGetTransport::new(&get_url))
        }
        other => return Err(format!("Unknown TRANSPORT: {}", other).into()),
    };

    let source = HtmlSource::new(&page_url, &price_class)?;
    let config = WatcherConfig {
        poll_interval: Duration::from_millis(poll_interval_ms),
    };

    PriceWatcher::with_config(source, transport, config).run().await;
    Ok(())
}
