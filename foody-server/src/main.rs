use foody_server::{BoxError, Config, Server, logger};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    logger::init_logger(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    tracing::info!("Starting foody-server (env: {})", config.environment);

    if let Err(e) = Server::new(config).run().await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
