#![cfg(feature = "std")]

//! Server side of a connection: turns requests into [`FieldApi`] calls.

use anyhow::anyhow;
use log::{debug, warn};

use crate::core::FieldError;
use crate::protocol::{FieldApi, Message, PROTOCOL_VERSION};
use crate::transport::Transport;

pub struct Skeleton<E: FieldApi, T: Transport> {
    engine: E,
    transport: T,
}

impl<E: FieldApi, T: Transport> Skeleton<E, T> {
    pub fn new(engine: E, transport: T) -> Self {
        Self { engine, transport }
    }

    async fn handshake(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Hello { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::Hello { version: PROTOCOL_VERSION })
                    .await
            }
            Message::Hello { version } => Err(anyhow!(
                "Protocol version mismatch: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            other => Err(anyhow!("Expected handshake, got {:?}", other)),
        }
    }

    /// Answer a single request.
    async fn dispatch(&self, msg: Message) -> anyhow::Result<Message> {
        let outcome = match msg {
            Message::CreateField { size } => self.engine.create_field(size).await.map(|()| Message::Ack),
            Message::ClearField => self.engine.clear_field().await.map(|()| Message::Ack),
            Message::AddShips { coords } => self.engine.add_ships(&coords).await.map(|()| Message::Ack),
            Message::Shoot { coord } => self.engine.shoot(&coord).await.map(Message::ShotResp),
            Message::StateReq => self.engine.state().await.map(Message::StateResp),
            Message::BoardReq => self.engine.board().await.map(Message::BoardResp),
            other => return Err(anyhow!("Unexpected request: {:?}", other)),
        };
        match outcome {
            Ok(reply) => Ok(reply),
            Err(e) => match e.downcast_ref::<FieldError>() {
                Some(kind) => Ok(Message::Failed(*kind)),
                None => Err(e),
            },
        }
    }

    /// Serve requests until the peer goes away.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.handshake().await?;

        while let Ok(msg) = self.transport.recv().await {
            debug!("request: {:?}", msg);
            let reply = match self.dispatch(msg).await {
                Ok(reply) => reply,
                Err(e) => {
                    warn!("closing session: {}", e);
                    return Err(e);
                }
            };
            self.transport.send(reply).await?;
        }
        Ok(())
    }
}
