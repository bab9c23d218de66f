#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::sync::Arc;

#[cfg(feature = "std")]
use battlefield::{
    init_logging_with, server, Engine, FieldApi, FieldError, ServerConfig, Stub, TcpTransport,
    MAX_FIELD_SIZE,
};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Single player battleship field server", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level (error, warn, info, debug, trace). Overrides BATTLEFIELD_LOG.
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Host the battlefield and serve clients over TCP.
    Serve {
        #[arg(long, default_value = battlefield::config::DEFAULT_BIND)]
        bind: String,
        #[arg(long, default_value_t = 30, help = "Timeout for a single frame read or write")]
        timeout_secs: u64,
        #[arg(long, default_value_t = battlefield::config::DEFAULT_MAX_MESSAGE_SIZE)]
        max_message_size: u32,
    },
    /// Connect to a running server and play from the command line.
    Client {
        #[arg(long, default_value = battlefield::config::DEFAULT_BIND)]
        connect: String,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(cli.log_level);

    match cli.command {
        Commands::Serve {
            bind,
            timeout_secs,
            max_message_size,
        } => {
            let config = ServerConfig {
                bind,
                timeout: Duration::from_secs(timeout_secs),
                max_message_size,
            };
            server::run(Arc::new(Engine::new()), config).await
        }
        Commands::Client { connect } => {
            let transport = TcpTransport::connect(&connect).await?;
            println!("Connected to {}. Type help for commands.", connect);
            run_client(Stub::new(transport)).await
        }
    }
}

#[cfg(feature = "std")]
const HELP: &str = "Commands:
    create <n>            create an n x n field (1..=26)
    clear                 discard the current field
    ships <a b>[,<a b>]   place ships by opposite corners, e.g. ships A1 A3,C5 D6
    shoot <coord>         fire at a cell, e.g. shoot B5
    state                 show ship and shot counters
    board                 show the field
    help                  show this text
    quit                  leave";

/// Read commands from stdin until `quit` or end of input.
#[cfg(feature = "std")]
async fn run_client(api: impl FieldApi) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let line = line.trim();
        let (cmd, arg) = match line.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        let outcome = match cmd.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => return Ok(()),
            "help" | "?" => {
                println!("{}", HELP);
                continue;
            }
            "create" => match arg.parse::<usize>() {
                Ok(size) => api
                    .create_field(size)
                    .await
                    .map(|()| format!("Field {}x{} created.", size, size)),
                Err(_) => Ok(format!("Size must be a number in 1..={}.", MAX_FIELD_SIZE)),
            },
            "clear" => api.clear_field().await.map(|()| "Field cleared.".to_string()),
            "ships" => api.add_ships(arg).await.map(|()| "Ships placed.".to_string()),
            "shoot" => api.shoot(arg).await.map(|res| {
                match (res.knock, res.destroy, res.end) {
                    (_, true, true) => "Destroyed! All ships are gone.".to_string(),
                    (_, true, false) => "Destroyed!".to_string(),
                    (true, false, _) => "Hit.".to_string(),
                    _ => "Miss.".to_string(),
                }
            }),
            "state" => api.state().await.map(|s| {
                format!(
                    "ships: {}  destroyed: {}  knocked: {}  shots: {}",
                    s.ship_count, s.destroyed, s.knocked, s.shots_fired
                )
            }),
            "board" => api.board().await,
            other => Ok(format!("Unknown command \"{}\". Use help.", other)),
        };
        match outcome {
            Ok(text) => println!("{}", text),
            Err(e) => match e.downcast_ref::<FieldError>() {
                Some(kind) => println!("Rejected: {}.", kind),
                None => return Err(e),
            },
        }
    }
}
