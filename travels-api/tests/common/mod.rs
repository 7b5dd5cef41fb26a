#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use travels_api::{app, AppState};
use travels_core::model::{Customer, Package, Ticket};
use travels_core::predicate::TicketPredicate;
use travels_core::repository::{
    CustomerRepository, PackageRepository, RepositoryError, TicketRepository,
};
use travels_core::service::{CustomerService, PackageService, TicketService};

#[derive(Default)]
pub struct InMemoryCustomers(Mutex<HashMap<i32, Customer>>);

impl InMemoryCustomers {
    pub fn insert(&self, customer: Customer) {
        self.0.lock().unwrap().insert(customer.customer_id, customer);
    }

    pub fn get(&self, id: i32) -> Option<Customer> {
        self.0.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        Ok(self.0.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        self.insert(customer.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.0.lock().unwrap().remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPackages(Mutex<HashMap<i32, Package>>);

impl InMemoryPackages {
    pub fn insert(&self, package: Package) {
        self.0.lock().unwrap().insert(package.id, package);
    }
}

#[async_trait]
impl PackageRepository for InMemoryPackages {
    async fn find_all(&self) -> Result<Vec<Package>, RepositoryError> {
        Ok(self.0.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Package>, RepositoryError> {
        Ok(self.0.lock().unwrap().get(&id).cloned())
    }

    async fn save(&self, package: &Package) -> Result<(), RepositoryError> {
        self.insert(package.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTickets(Mutex<HashMap<i32, Ticket>>);

impl InMemoryTickets {
    pub fn insert(&self, ticket: Ticket) {
        self.0.lock().unwrap().insert(ticket.ticket_id, ticket);
    }

    pub fn get(&self, id: i32) -> Option<Ticket> {
        self.0.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl TicketRepository for InMemoryTickets {
    async fn find_all(&self) -> Result<Vec<Ticket>, RepositoryError> {
        Ok(self.0.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Ticket>, RepositoryError> {
        Ok(self.get(id))
    }

    async fn save(&self, ticket: &Ticket) -> Result<(), RepositoryError> {
        self.insert(ticket.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        self.0.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn find_by_predicate(
        &self,
        predicate: &TicketPredicate,
    ) -> Result<Vec<Ticket>, RepositoryError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .values()
            .filter(|ticket| predicate.matches(ticket))
            .cloned()
            .collect())
    }
}

pub struct TestApp {
    pub router: Router,
    pub customers: Arc<InMemoryCustomers>,
    pub packages: Arc<InMemoryPackages>,
    pub tickets: Arc<InMemoryTickets>,
}

pub fn test_app() -> TestApp {
    let customers = Arc::new(InMemoryCustomers::default());
    let packages = Arc::new(InMemoryPackages::default());
    let tickets = Arc::new(InMemoryTickets::default());

    let state = AppState {
        customers: Arc::new(CustomerService::new(customers.clone())),
        packages: Arc::new(PackageService::new(packages.clone())),
        tickets: Arc::new(TicketService::new(
            tickets.clone(),
            packages.clone(),
            customers.clone(),
        )),
    };

    TestApp {
        router: app(state),
        customers,
        packages,
        tickets,
    }
}

/// Drive one request through the router and decode the JSON body, if any.
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn customer(id: i32) -> Customer {
    Customer {
        customer_id: id,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@doe.com".to_string(),
        password: "secret".to_string(),
    }
}

pub fn package(id: i32, cost_per_person: i32) -> Package {
    Package {
        id,
        package_name: "Agra".to_string(),
        trip_duration: "2 Days".to_string(),
        cost_per_person,
    }
}
