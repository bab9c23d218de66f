#![cfg(feature = "std")]

//! Client side [`FieldApi`] that forwards every call over a transport.

use std::string::{String, ToString};
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;

use crate::core::{ShotResult, State};
use crate::protocol::{FieldApi, Message, PROTOCOL_VERSION};
use crate::transport::Transport;

pub struct Stub<T: Transport> {
    transport: Mutex<T>,
    handshaken: AtomicBool,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
            handshaken: AtomicBool::new(false),
        }
    }

    async fn ensure_handshake(&self, transport: &mut T) -> anyhow::Result<()> {
        if self.handshaken.load(Ordering::SeqCst) {
            return Ok(());
        }
        transport
            .send(Message::Hello { version: PROTOCOL_VERSION })
            .await?;
        match transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.handshaken.store(true, Ordering::SeqCst);
                Ok(())
            }
            Message::Hello { version } => Err(anyhow::anyhow!(
                "Protocol version mismatch: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    /// Send one request and wait for its reply. A `Failed` reply becomes an
    /// error wrapping the [`FieldError`](crate::core::FieldError).
    async fn request(&self, msg: Message) -> anyhow::Result<Message> {
        let mut transport = self.transport.lock().await;
        self.ensure_handshake(&mut transport).await?;
        transport.send(msg).await?;
        match transport.recv().await? {
            Message::Failed(kind) => Err(kind.into()),
            reply => Ok(reply),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> FieldApi for Stub<T> {
    async fn create_field(&self, size: usize) -> anyhow::Result<()> {
        match self.request(Message::CreateField { size }).await? {
            Message::Ack => Ok(()),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    async fn clear_field(&self) -> anyhow::Result<()> {
        match self.request(Message::ClearField).await? {
            Message::Ack => Ok(()),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    async fn add_ships(&self, coords: &str) -> anyhow::Result<()> {
        let msg = Message::AddShips { coords: coords.to_string() };
        match self.request(msg).await? {
            Message::Ack => Ok(()),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    async fn shoot(&self, coord: &str) -> anyhow::Result<ShotResult> {
        let msg = Message::Shoot { coord: coord.to_string() };
        match self.request(msg).await? {
            Message::ShotResp(result) => Ok(result),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    async fn state(&self) -> anyhow::Result<State> {
        match self.request(Message::StateReq).await? {
            Message::StateResp(state) => Ok(state),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }

    async fn board(&self) -> anyhow::Result<String> {
        match self.request(Message::BoardReq).await? {
            Message::BoardResp(board) => Ok(board),
            _ => Err(anyhow::anyhow!("Unexpected message")),
        }
    }
}
