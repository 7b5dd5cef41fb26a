use std::sync::Arc;

use tracing::info;

use crate::error::TravelsError;
use crate::mapper;
use crate::model::Ticket;
use crate::predicate::TicketPredicate;
use crate::repository::{CustomerRepository, PackageRepository, TicketRepository};
use crate::resource::{SearchTicketResource, TicketRefund};

/// Ticket lifecycle orchestration. This is the only service composing more
/// than one repository in a single operation: cost computation reads the
/// referenced package, and search cross-references customers and packages
/// for the joined projection.
pub struct TicketService {
    tickets: Arc<dyn TicketRepository>,
    packages: Arc<dyn PackageRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl TicketService {
    pub fn new(
        tickets: Arc<dyn TicketRepository>,
        packages: Arc<dyn PackageRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            tickets,
            packages,
            customers,
        }
    }

    /// Create-or-replace on `ticket_id`: the cost is derived from the
    /// referenced package before the single row write.
    pub async fn create_ticket(&self, mut ticket: Ticket) -> Result<Ticket, TravelsError> {
        ticket.total_cost = self.cost_of(&ticket).await?;
        self.tickets.save(&ticket).await?;
        info!(
            ticket_id = ticket.ticket_id,
            total_cost = ticket.total_cost,
            "ticket created"
        );
        Ok(ticket)
    }

    /// Overwrite an existing ticket, re-deriving the cost.
    pub async fn update_ticket_by_id(&self, mut ticket: Ticket) -> Result<Ticket, TravelsError> {
        if self.tickets.find_by_id(ticket.ticket_id).await?.is_none() {
            return Err(TravelsError::NotFound {
                resource: "Ticket",
                id: ticket.ticket_id,
            });
        }
        ticket.total_cost = self.cost_of(&ticket).await?;
        self.tickets.save(&ticket).await?;
        info!(ticket_id = ticket.ticket_id, "ticket updated");
        Ok(ticket)
    }

    pub async fn ticket_entities(&self) -> Result<Vec<Ticket>, TravelsError> {
        Ok(self.tickets.find_all().await?)
    }

    /// Execute the predicate in the store, then resolve the customer and
    /// package join per matched ticket.
    pub async fn search(
        &self,
        predicate: &TicketPredicate,
    ) -> Result<Vec<SearchTicketResource>, TravelsError> {
        let tickets = self.tickets.find_by_predicate(predicate).await?;

        let mut results = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            let customer = self
                .customers
                .find_by_id(ticket.customer_id)
                .await?
                .ok_or(TravelsError::NotFound {
                    resource: "Customer",
                    id: ticket.customer_id,
                })?;
            let package = self
                .packages
                .find_by_id(ticket.package_id)
                .await?
                .ok_or(TravelsError::NotFound {
                    resource: "Package",
                    id: ticket.package_id,
                })?;
            results.push(mapper::search_projection(&ticket, &customer, &package));
        }
        Ok(results)
    }

    /// Cancel a ticket; the refund equals the stored cost at the moment of
    /// cancellation.
    pub async fn delete_ticket(&self, ticket_id: i32) -> Result<TicketRefund, TravelsError> {
        let ticket = self
            .tickets
            .find_by_id(ticket_id)
            .await?
            .ok_or(TravelsError::NotFound {
                resource: "Ticket",
                id: ticket_id,
            })?;
        let refund_amount = ticket.total_cost;
        self.tickets.delete_by_id(ticket_id).await?;
        info!(ticket_id, refund_amount, "ticket cancelled");
        Ok(TicketRefund { refund_amount })
    }

    async fn cost_of(&self, ticket: &Ticket) -> Result<i32, TravelsError> {
        let package = self
            .packages
            .find_by_id(ticket.package_id)
            .await?
            .ok_or(TravelsError::NotFound {
                resource: "Package",
                id: ticket.package_id,
            })?;
        Ok(ticket.total_members * package.cost_per_person)
    }
}
