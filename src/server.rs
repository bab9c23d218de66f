#![cfg(feature = "std")]

//! TCP front end: every connection talks to the same [`Engine`].

use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::engine::Engine;
use crate::skeleton::Skeleton;
use crate::transport::tcp::TcpTransport;

/// Bind to `config.bind` and serve forever.
pub async fn run(engine: Arc<Engine>, config: ServerConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&config.bind).await?;
    info!("listening at {}", listener.local_addr()?);
    serve(listener, engine, config).await
}

/// Accept connections on `listener`, one task per connection.
pub async fn serve(
    listener: TcpListener,
    engine: Arc<Engine>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    loop {
        let (stream, addr) = listener.accept().await?;
        info!("client connected from {}", addr);
        let transport = TcpTransport::with_config(stream, &config);
        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            let mut skeleton = Skeleton::new(engine, transport);
            match skeleton.run().await {
                Ok(()) => info!("client {} disconnected", addr),
                Err(e) => warn!("session with {} ended: {}", addr, e),
            }
        });
    }
}
