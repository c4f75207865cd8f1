use api_server::{app, AppState};
use application::UserApp;
use tracing::info;

mod config;
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("api_server=debug,tower_http=debug")
        .init();

    info!("🚀 Starting User API Server");

    // Load configuration from environment
    let config = Config::from_env();

    info!("💾 Using database: {}", config.database_path);
    info!("🌐 API server will bind to: {}:{}", config.api_host, config.api_port);

    // Wire the persistence layer; the pool lives for the whole process
    let user_app = UserApp::new(&config.database_path);
    let app = app(AppState {
        user_repository: user_app.user_repository.clone(),
    });

    // Run the server
    let bind_address = format!("{}:{}", config.api_host, config.api_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   GET  /user?id=<id> - Fetch a user by id");
    info!("   POST /user         - Add a user from a JSON body");
    info!("   GET  /health       - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
