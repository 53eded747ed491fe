mod cli;

use crate::cli::{StorageBackendArg, CLI};
use clap::Parser;
use showreel_core::VideoRepository;
use showreel_gateway::app::App;
use showreel_gateway::state::AppState;
use showreel_storage::{InMemoryRepository, MongoRepository};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    let repository: Arc<dyn VideoRepository> = match config.storage {
        StorageBackendArg::Mongodb => {
            let repository = MongoRepository::connect(&config.mongodb_uri).await?;
            info!("connected to MongoDB");
            Arc::new(repository)
        }
        StorageBackendArg::InMemory => Arc::new(InMemoryRepository::new()),
    };

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        storage_backend = %config.storage,
        "starting gateway server"
    );

    axum::serve(listener, App::router(AppState::new(repository))).await?;

    Ok(())
}
