use std::sync::Arc;

use travels_core::service::{CustomerService, PackageService, TicketService};

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
    pub packages: Arc<PackageService>,
    pub tickets: Arc<TicketService>,
}
