use std::sync::Arc;

use tracing::info;

use crate::error::TravelsError;
use crate::model::Customer;
use crate::repository::CustomerRepository;

pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    pub async fn list(&self) -> Result<Vec<Customer>, TravelsError> {
        Ok(self.customers.find_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Customer, TravelsError> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or(TravelsError::NotFound {
                resource: "Customer",
                id,
            })
    }

    /// Sign-up persists unconditionally: saving an existing id overwrites.
    pub async fn sign_up(&self, customer: Customer) -> Result<Customer, TravelsError> {
        self.customers.save(&customer).await?;
        info!(customer_id = customer.customer_id, "customer signed up");
        Ok(customer)
    }

    /// Idempotent: deleting an absent customer succeeds silently.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), TravelsError> {
        self.customers.delete_by_id(id).await?;
        Ok(())
    }
}
