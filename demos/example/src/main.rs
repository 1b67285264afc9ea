//! Example screenshot project served with Screegen.

mod config;
mod screens;
mod translations;

use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let addr: SocketAddr = "127.0.0.1:3000".parse()?;
    screegen::web::run_server(config::project_config(), addr).await
}
