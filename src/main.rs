use linkserver::server::{self, DEFAULT_PORT, ServerConfig};
use linkserver::store::LinkStore;
use linkserver::store::memory::MemoryStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = ServerConfig::default();
    let mut data_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                config.port = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_file = Some(args[i + 1].clone());
                i += 2;
            }
            "--debug" => {
                config.debug = true;
                i += 1;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--port <port>] [--data <file>] [--debug]", args[0]);
                eprintln!("Example: {} --port {} --data links.json", args[0], DEFAULT_PORT);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    let level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let store = match data_file {
        Some(path) => MemoryStore::from_json_file(path)?,
        None => {
            tracing::warn!("No --data file given, serving an empty link index");
            MemoryStore::new()
        }
    };
    let store: Arc<dyn LinkStore> = Arc::new(store);

    server::run(config, store).await
}
