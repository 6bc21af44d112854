mod api;
mod cli;
mod db;
mod router;
mod startup;
mod state;
mod store;
mod trips;

use tracing::info;

use cli::Command;

fn load_config() -> travelog_core::Config {
    travelog_core::config::load_dotenv();
    travelog_core::Config::from_env()
}

async fn serve(config: &travelog_core::Config, memory: bool) -> anyhow::Result<()> {
    config.log_summary();
    let state = startup::build_app_state(config, memory).await;
    let app = router::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://localhost:{}", config.server.port);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed(config: &travelog_core::Config) -> anyhow::Result<()> {
    let Some(store) = startup::connect_store(config, false).await else {
        anyhow::bail!("seed requires a reachable database (DATABASE_URL, DATABASE_NAME)");
    };
    let inserted = trips::seed(store.as_ref()).await?;
    info!("Inserted {} trips", inserted);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    let config = load_config();
    let args: Vec<String> = std::env::args().collect();

    match cli::parse(&args) {
        Command::Serve { memory } => serve(&config, memory).await?,
        Command::Seed => seed(&config).await?,
        Command::Usage => cli::print_usage(),
    }

    Ok(())
}
