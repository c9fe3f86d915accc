use std::error::Error;

use sqlbridge::routes::create_router;
use sqlbridge::state::create_state;
use sqlbridge_configuration::{ProcessEnvironment, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = ServiceConfig::from_environment(&ProcessEnvironment)?;
    let state = create_state(&config)?;
    let router = create_router(state);

    let address = format!("0.0.0.0:{}", config.port);
    log::info!("Starting server on {}", address);

    axum::Server::bind(&address.parse()?)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
