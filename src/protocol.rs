#![cfg(feature = "std")]

//! Messages and the operation trait shared by the server and its clients.

use std::string::String;
use std::sync::Arc;

use crate::core::{FieldError, ShotResult, State};
use crate::engine::Engine;

/// Version exchanged in the `Hello` handshake.
pub const PROTOCOL_VERSION: u32 = 1;

/// Messages exchanged between the field server and a remote client.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// Handshake, sent by the client and echoed by the server.
    Hello { version: u32 },
    /// Allocate a new field of `size` x `size` cells.
    CreateField { size: usize },
    /// Discard the current field.
    ClearField,
    /// Place ships, e.g. `"A1 B2,C4 C6"`.
    AddShips { coords: String },
    /// Fire at a coordinate, e.g. `"B5"`.
    Shoot { coord: String },
    /// Request the counters.
    StateReq,
    /// Request a text rendering of the field.
    BoardReq,
    /// The request succeeded and carries no data.
    Ack,
    /// Result of a `Shoot`.
    ShotResp(ShotResult),
    /// Reply to `StateReq`.
    StateResp(State),
    /// Reply to `BoardReq`.
    BoardResp(String),
    /// The request was rejected by the field.
    Failed(FieldError),
}

/// The operations a client can invoke on the field.
///
/// Rejections by the field are returned as an [`anyhow::Error`] wrapping a
/// [`FieldError`]; use `downcast_ref::<FieldError>()` to recover the kind.
#[async_trait::async_trait]
pub trait FieldApi: Send + Sync {
    async fn create_field(&self, size: usize) -> anyhow::Result<()>;
    async fn clear_field(&self) -> anyhow::Result<()>;
    async fn add_ships(&self, coords: &str) -> anyhow::Result<()>;
    async fn shoot(&self, coord: &str) -> anyhow::Result<ShotResult>;
    async fn state(&self) -> anyhow::Result<State>;
    async fn board(&self) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
impl FieldApi for Engine {
    async fn create_field(&self, size: usize) -> anyhow::Result<()> {
        Ok(Engine::create_field(self, size)?)
    }

    async fn clear_field(&self) -> anyhow::Result<()> {
        Engine::clear_field(self);
        Ok(())
    }

    async fn add_ships(&self, coords: &str) -> anyhow::Result<()> {
        Engine::add_ships(self, coords)?;
        Ok(())
    }

    async fn shoot(&self, coord: &str) -> anyhow::Result<ShotResult> {
        Ok(Engine::shoot(self, coord)?)
    }

    async fn state(&self) -> anyhow::Result<State> {
        Ok(Engine::state(self))
    }

    async fn board(&self) -> anyhow::Result<String> {
        Ok(Engine::render(self, false))
    }
}

#[async_trait::async_trait]
impl<A: FieldApi + ?Sized> FieldApi for Arc<A> {
    async fn create_field(&self, size: usize) -> anyhow::Result<()> {
        (**self).create_field(size).await
    }

    async fn clear_field(&self) -> anyhow::Result<()> {
        (**self).clear_field().await
    }

    async fn add_ships(&self, coords: &str) -> anyhow::Result<()> {
        (**self).add_ships(coords).await
    }

    async fn shoot(&self, coord: &str) -> anyhow::Result<ShotResult> {
        (**self).shoot(coord).await
    }

    async fn state(&self) -> anyhow::Result<State> {
        (**self).state().await
    }

    async fn board(&self) -> anyhow::Result<String> {
        (**self).board().await
    }
}
