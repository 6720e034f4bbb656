use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use flavorly_core::domain::seed::{SeedMenuInput, SeedService};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};

mod application;
mod args;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if args.llm.gemini_api_key.is_empty() {
        warn!("GEMINI_API_KEY is not set, menu search will use substring matching only");
    }

    let app_state = state(args.clone()).await?;

    if args.seed.on_startup {
        match app_state
            .service
            .seed_menu(SeedMenuInput { force: false })
            .await
        {
            Ok(outcome) => info!(?outcome, "startup seeding done"),
            Err(e) => error!("startup seeding failed: {}", e),
        }
    }

    let router = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
