use std::net::SocketAddr;
use std::path::PathBuf;
use clap::Parser;
use log::info;
use typifier::{server, ServerConfig};

#[derive(Parser)]
#[command(author, version, about = "Serve product type predictions over HTTP", long_about = None)]
struct Args {
    /// Path of the trained pipeline artifact
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    addr: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    typifier::init_logger();
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(model) = args.model {
        config = config.with_model_path(model);
    }
    if let Some(addr) = args.addr {
        config = config.with_addr(addr);
    }

    info!("=== Starting typifier server ===");
    info!("Model: {:?}", config.model_path);

    server::serve(config).await?;
    Ok(())
}
