pub mod customer_service;
pub mod package_service;
pub mod ticket_service;

pub use customer_service::CustomerService;
pub use package_service::PackageService;
pub use ticket_service::TicketService;
