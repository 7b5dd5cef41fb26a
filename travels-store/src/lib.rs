pub mod app_config;
pub mod customer_repo;
pub mod database;
pub mod package_repo;
pub mod ticket_repo;

pub use customer_repo::PostgresCustomerRepository;
pub use database::DbClient;
pub use package_repo::PostgresPackageRepository;
pub use ticket_repo::PostgresTicketRepository;
