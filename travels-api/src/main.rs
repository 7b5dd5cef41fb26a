use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travels_api::{app, AppState};
use travels_core::repository::{CustomerRepository, PackageRepository, TicketRepository};
use travels_core::service::{CustomerService, PackageService, TicketService};
use travels_store::{
    DbClient, PostgresCustomerRepository, PostgresPackageRepository, PostgresTicketRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travels_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = travels_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Travels API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url, config.database.max_connections)
        .await
        .context("Failed to connect to Postgres")?;
    db.migrate().await.context("Failed to run migrations")?;

    let customers: Arc<dyn CustomerRepository> =
        Arc::new(PostgresCustomerRepository::new(db.pool.clone()));
    let packages: Arc<dyn PackageRepository> =
        Arc::new(PostgresPackageRepository::new(db.pool.clone()));
    let tickets: Arc<dyn TicketRepository> =
        Arc::new(PostgresTicketRepository::new(db.pool.clone()));

    let state = AppState {
        customers: Arc::new(CustomerService::new(customers.clone())),
        packages: Arc::new(PackageService::new(packages.clone())),
        tickets: Arc::new(TicketService::new(tickets, packages, customers)),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
