use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Single failing field reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSignUp {
    #[serde(default)]
    pub customer_id: Option<i32>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    pub id: i32,
    pub package_name: String,
    pub trip_duration: String,
    pub cost_per_person: i32,
}

/// Wire shape of ticket create/update requests. Ids and member counts arrive
/// as strings; the validator rejects empty fields before the mapper parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(default)]
    pub ticket_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub travel_date: Option<String>,
    #[serde(default)]
    pub total_members: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResource {
    pub ticket_id: String,
    pub customer_id: String,
    pub package_id: String,
    pub travel_date: String,
    pub total_members: String,
    pub total_cost: i32,
}

/// Search request body; every field is optional but at least one must be
/// present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub travel_date: Option<String>,
}

/// Joined projection returned by ticket search, cross-referencing the
/// matched ticket's customer and package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTicketResource {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub package_name: String,
    pub trip_duration: String,
    pub travel_date: NaiveDate,
    pub total_members: i32,
    pub total_cost_of_trip: i32,
}

/// Refund envelope returned on ticket cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRefund {
    pub refund_amount: i32,
}
