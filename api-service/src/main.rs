mod handlers;
// Keep models for request payload types
mod models;
mod routes;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with enhanced configuration
    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,rekesh_api_service=debug".into());

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(true) // Include the target (module path) in logs
        .init();

    tracing::info!(
        "Logging initialized at level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".into());
    let bind_addr = format!("0.0.0.0:{}", port);

    let app = routes::create_router();

    tracing::info!("Procurement API listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
