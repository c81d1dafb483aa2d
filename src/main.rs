// book catalog server

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use bliotech::{config::Config, sql};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("bliotech=debug,tower_http=info")),
		)
		.init();

	let config = Config::from_env()?;

	let db = sql::connect(&config.database_url)
		.await
		.with_context(|| format!("can't open database {}", config.database_url))?;
	sql::create_schema(&db).await.context("can't create tables")?;

	let app = bliotech::router(db);

	let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
	tracing::info!("listening on http://{}", config.bind_addr);
	axum::serve(listener, app).await?;

	Ok(())
}
