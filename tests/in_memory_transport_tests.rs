#![cfg(feature = "std")]

use std::sync::Arc;

use battlefield::transport::in_memory::InMemoryTransport;
use battlefield::transport::Transport;
use battlefield::{Engine, FieldApi, FieldError, Message, ShotResult, Skeleton, State, Stub};

#[tokio::test(flavor = "multi_thread")]
async fn test_stub_skeleton_in_memory() -> anyhow::Result<()> {
    let (server_transport, client_transport) = InMemoryTransport::pair();
    let engine = Arc::new(Engine::new());

    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(engine, server_transport);
        skeleton.run().await.unwrap();
    });

    let stub = Stub::new(client_transport);

    stub.create_field(3).await?;
    stub.add_ships("A1 A2").await?;
    let res = stub.shoot("A1").await?;
    assert_eq!(res, ShotResult { knock: true, destroy: false, end: false });
    let res = stub.shoot("A2").await?;
    assert_eq!(res, ShotResult { knock: true, destroy: true, end: true });

    let state = stub.state().await?;
    assert_eq!(
        state,
        State { ship_count: 1, destroyed: 1, knocked: 0, shots_fired: 2 }
    );
    let board = stub.board().await?;
    assert!(board.contains('#'));

    stub.clear_field().await?;
    assert_eq!(stub.state().await?, State::default());

    drop(stub);
    server.await.unwrap();
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_field_errors_survive_the_round_trip() -> anyhow::Result<()> {
    let (server_transport, client_transport) = InMemoryTransport::pair();
    let engine = Arc::new(Engine::new());
    let server = tokio::spawn(async move {
        Skeleton::new(engine, server_transport).run().await
    });

    let stub = Stub::new(client_transport);
    let err = stub.create_field(0).await.unwrap_err();
    assert_eq!(err.downcast_ref::<FieldError>(), Some(&FieldError::InvalidSize));

    let err = stub.shoot("A1").await.unwrap_err();
    assert_eq!(err.downcast_ref::<FieldError>(), Some(&FieldError::ShipsNotPlaced));

    stub.create_field(4).await?;
    let err = stub.add_ships("A1 A1,B2 B2").await.unwrap_err();
    assert_eq!(err.downcast_ref::<FieldError>(), Some(&FieldError::OccupiedNearby));

    // the session survives rejected requests
    stub.add_ships("A1 A1,C3 D3").await?;
    assert_eq!(stub.state().await?.ship_count, 2);

    drop(stub);
    server.await??;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_skeleton_rejects_version_mismatch() -> anyhow::Result<()> {
    let (server_transport, mut client_transport) = InMemoryTransport::pair();
    let engine = Arc::new(Engine::new());
    let server = tokio::spawn(async move {
        Skeleton::new(engine, server_transport).run().await
    });

    client_transport.send(Message::Hello { version: 99 }).await?;
    let result = server.await?;
    assert!(result.unwrap_err().to_string().contains("version mismatch"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_skeleton_closes_on_unexpected_request() -> anyhow::Result<()> {
    let (server_transport, mut client_transport) = InMemoryTransport::pair();
    let engine = Arc::new(Engine::new());
    let server = tokio::spawn(async move {
        Skeleton::new(engine, server_transport).run().await
    });

    client_transport
        .send(Message::Hello { version: battlefield::PROTOCOL_VERSION })
        .await?;
    assert!(matches!(client_transport.recv().await?, Message::Hello { .. }));
    client_transport.send(Message::Ack).await?;
    assert!(server.await?.is_err());
    Ok(())
}
