use std::net::SocketAddr;
use std::sync::Arc;

mod config;
mod routing;
mod state;

use config::Config;
use state::GlobalState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>>
{
    pretty_env_logger::init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from(config::DEFAULT_CONFIG));
    let config = Config::load(&config_path)?;

    if !config.flickr.has_api_key() {
        log::warn!("No flickr api key in {} or FLICKR_API_KEY; galleries will be empty", config_path);
    }

    let address: SocketAddr = config.address.parse()
        .map_err(|error| format!("Bad address {}: {}", config.address, error))?;

    let gstate = Arc::new(GlobalState::new(config));
    let app = routing::get_all_routes(gstate);

    log::info!("Serving galleries on http://{}", address);

    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
