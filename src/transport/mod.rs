//! Message transports between a [`Stub`](crate::stub::Stub) and a
//! [`Skeleton`](crate::skeleton::Skeleton).

use crate::protocol::Message;

pub mod in_memory;
pub mod tcp;

/// A bidirectional, ordered stream of [`Message`]s.
///
/// `recv` fails once the peer is gone; the skeleton treats that as the end
/// of the session.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}
