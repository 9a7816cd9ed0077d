use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use employee_directory::{db, routes, seed, AppState, Config, DirectoryService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-help" || arg == "--help") {
        println!("Usage: employee-directory [OPTIONS]");
        println!("Options:");
        println!("  -config <path>  Path to configuration file (default: ./etc/directory.toml)");
        println!("  -help, --help   Print this help message");
        return Ok(());
    }

    let config_path = args
        .iter()
        .skip_while(|arg| arg.as_str() != "-config")
        .nth(1)
        .map(|s| s.to_string())
        .unwrap_or_else(|| "./etc/directory.toml".to_string());

    // Load configuration first (before logging init)
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Could not load config file: {}, using defaults", e);
        Config::default()
    });

    // Priority: RUST_LOG env var > config file > default "info"
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    info!("Starting employee directory...");
    info!("Loading configuration from: {}", config_path);

    let gateway = db::init_gateway(&config.database).await.map_err(|e| {
        tracing::error!("Storage initialization failed: {}", e);
        anyhow::anyhow!("Storage initialization failed: {}", e)
    })?;

    if let Some(seed_file) = &config.seed_file {
        seed::load_seed_file(gateway.as_ref(), seed_file)
            .await
            .map_err(|e| anyhow::anyhow!("Could not load seed file {}: {}", seed_file.display(), e))?;
    }

    let state = AppState::new(DirectoryService::new(gateway), config.clone());
    let app = routes::create_router(state);

    let addr: SocketAddr = match config.addr.parse() {
        Ok(addr) => addr,
        Err(_) => {
            tracing::warn!("Invalid address '{}', using default 0.0.0.0:8080", config.addr);
            SocketAddr::from(([0, 0, 0, 0], 8080))
        }
    };

    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
