use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: i32,
    pub package_name: String,
    pub trip_duration: String,
    pub cost_per_person: i32,
}

/// Persisted ticket row. `total_cost` is derived at create/update time:
/// `total_members * package.cost_per_person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: i32,
    pub customer_id: i32,
    pub package_id: i32,
    pub travel_date: NaiveDate,
    pub total_members: i32,
    pub total_cost: i32,
}
