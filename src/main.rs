use wunderlist::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    service::password::PasswordHasher,
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&config).await?;

    let app_state = AppState::from_database(db, PasswordHasher::new(config.bcrypt_cost));
    let app = router::routes().with_state(app_state).layer(session);
    let app = startup::with_request_tracing(app);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Server listening on {}", config.bind_address);
    tracing::info!("Swagger UI available at http://{}/api/docs", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
