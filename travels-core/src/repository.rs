use async_trait::async_trait;

use crate::model::{Customer, Package, Ticket};
use crate::predicate::TicketPredicate;

pub type RepositoryError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for customer records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError>;

    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError>;
}

/// Repository trait for travel packages
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Package>, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Package>, RepositoryError>;

    async fn save(&self, package: &Package) -> Result<(), RepositoryError>;
}

/// Repository trait for tickets, including predicate-driven search
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Ticket>, RepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, RepositoryError>;

    /// Create-or-replace on `ticket_id`.
    async fn save(&self, ticket: &Ticket) -> Result<(), RepositoryError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError>;

    async fn find_by_predicate(
        &self,
        predicate: &TicketPredicate,
    ) -> Result<Vec<Ticket>, RepositoryError>;
}
