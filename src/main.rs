use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use roast_api::{api, config, openrouter, store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roast_api=info")),
        )
        .init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new()?;
    config::Config::print_env_vars();

    let completion_client = openrouter::CompletionClient::new(
        config.openrouter_base_url.clone(),
        config.openrouter_api_key.clone(),
        config.openrouter_timeout,
    )?;
    if !completion_client.has_api_key() {
        tracing::warn!("OPENROUTER_API_KEY is not set; /api/generate-roast will return 500");
    }
    let store = store::connect(&config.store_url, &config.db_name).await?;
    let state = api::AppState::new(completion_client, store.clone());
    let app = api::router(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 127.0.0.1", host_str);
        std::net::IpAddr::from([127, 0, 0, 1])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 8001", port_str);
        8001
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await?;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
