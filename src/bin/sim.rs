use std::sync::Arc;

use battlefield::{
    init_logging, Coordinate, Engine, FieldApi, InMemoryTransport, Skeleton, Stub,
};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

/// Fire at every cell of a field in random order until all ships are gone.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <size> <ships> [seed]", args[0]);
        std::process::exit(1);
    }
    let size: usize = args[1].parse()?;
    let ships = &args[2];
    let mut rng = match args.get(3) {
        Some(seed) => SmallRng::seed_from_u64(seed.parse()?),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let engine = Arc::new(Engine::new());
    let (server_transport, client_transport) = InMemoryTransport::pair();
    let server = tokio::spawn(async move {
        let mut skeleton = Skeleton::new(engine, server_transport);
        skeleton.run().await
    });

    let stub = Stub::new(client_transport);
    stub.create_field(size).await?;
    stub.add_ships(ships).await?;

    let mut targets: Vec<Coordinate> = (0..size)
        .flat_map(|col| (0..size).map(move |row| Coordinate::new(col, row)))
        .collect();
    targets.shuffle(&mut rng);

    let mut hits = 0usize;
    let mut ended = false;
    for target in targets {
        let result = stub.shoot(&target.to_string()).await?;
        if result.knock {
            hits += 1;
        }
        if result.end {
            ended = true;
            break;
        }
    }

    let state = stub.state().await?;
    drop(stub);
    server.await??;

    let summary = json!({
        "size": size,
        "ships": state.ship_count,
        "destroyed": state.destroyed,
        "shots": state.shots_fired,
        "hits": hits,
        "ended": ended,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
