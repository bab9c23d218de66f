#![cfg(feature = "std")]

use battlefield::protocol::{Message, PROTOCOL_VERSION};
use battlefield::transport::tcp::TcpTransport;
use battlefield::transport::Transport;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_length_prefix() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // length far above the frame limit
        let bad_length = [0xFF, 0xFF, 0xFF, 0xFF];
        socket.write_all(&bad_length).await.unwrap();
        socket.flush().await.unwrap();

        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let mut transport = TcpTransport::connect(addr).await?;

    let result = transport.recv().await;
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("too large"));

    server_task.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_zero_length_frame() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        socket.write_all(&[0u8, 0, 0, 0]).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let mut transport = TcpTransport::connect(addr).await?;
    let err_msg = transport.recv().await.unwrap_err().to_string();
    assert!(err_msg.contains("Invalid message length"));

    server_task.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_truncated_frame() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        // announce 100 bytes, deliver 10, then hang up
        socket.write_all(&100u32.to_be_bytes()).await.unwrap();
        socket.write_all(&[0u8; 10]).await.unwrap();
        socket.flush().await.unwrap();
    });

    let mut transport = TcpTransport::connect(addr).await?;
    let err_msg = transport.recv().await.unwrap_err().to_string();
    assert!(err_msg.contains("closed by peer"));

    server_task.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_garbage_body_fails_to_decode() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        // unknown enum variant index
        socket.write_all(&4u32.to_be_bytes()).await.unwrap();
        socket.write_all(&[0xEE, 0xEE, 0xEE, 0xEE]).await.unwrap();
        socket.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let mut transport = TcpTransport::connect(addr).await?;
    let err_msg = transport.recv().await.unwrap_err().to_string();
    assert!(err_msg.contains("Deserialization error"));

    server_task.await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_oversized_send_is_refused() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server_task = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
    });

    let stream = tokio::net::TcpStream::connect(addr).await?;
    let mut transport = TcpTransport::with_limits(stream, Duration::from_secs(5), 16);
    let result = transport
        .send(Message::AddShips { coords: "A1 A1,".repeat(10) })
        .await;
    assert!(result.unwrap_err().to_string().contains("too large"));

    // small frames still go through
    transport.send(Message::Hello { version: PROTOCOL_VERSION }).await?;

    server_task.await?;
    Ok(())
}
