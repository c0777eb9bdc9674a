use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::{error, info};

use portfolio::{
    config::Config,
    infrastructure::{database::connect_repository, profile::site_owner},
    presentation::{app::build_app, http::endpoints::root::ApiState},
    telemetry,
};

#[main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::try_parse()?;

    let repo = connect_repository(&config.storage).await.inspect_err(|err| {
        error!(error = ?err, "storage initialisation failed");
    })?;

    let app = build_app(ApiState::new(repo), Arc::new(site_owner()), &config);

    info!("Starting server at {}", config.server_url());

    Server::new(TcpListener::bind(config.bind_address()))
        .run(app)
        .await?;

    Ok(())
}
