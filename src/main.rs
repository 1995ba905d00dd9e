mod config;
mod error;
mod routes;
mod scrape;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env();
    let port = config.port;

    if config.unsplash.access_key.is_none() {
        tracing::warn!("UNSPLASH_ACCESS_KEY not set, photo search will return no results");
    }

    let state = state::AppState::new(config).expect("http client init failed");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "foundation-site listening");
    axum::serve(listener, app).await.expect("server failed");
}
