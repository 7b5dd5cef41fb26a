//! Pure conversions between wire resources (string-typed ids) and entities
//! (integer-typed). Malformed input is the validator's problem; a parse
//! failure here means something unvalidated slipped through and surfaces as
//! [`TravelsError::Internal`].

use chrono::NaiveDate;

use crate::error::TravelsError;
use crate::model::{Customer, Package, Ticket};
use crate::predicate::TicketPredicate;
use crate::resource::{
    CustomerDetails, CustomerSignUp, PackageDetails, SearchCriteria, SearchTicketResource,
    TicketRequest, TicketResource,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_int(field: &str, value: Option<&str>) -> Result<i32, TravelsError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| TravelsError::Internal(format!("unvalidated {field} reached the mapper")))
}

fn parse_date(field: &str, value: Option<&str>) -> Result<NaiveDate, TravelsError> {
    value
        .and_then(|v| NaiveDate::parse_from_str(v, DATE_FORMAT).ok())
        .ok_or_else(|| TravelsError::Internal(format!("unvalidated {field} reached the mapper")))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn ticket_request_to_entity(resource: &TicketRequest) -> Result<Ticket, TravelsError> {
    Ok(Ticket {
        ticket_id: parse_int("ticketId", resource.ticket_id.as_deref())?,
        customer_id: parse_int("customerId", resource.customer_id.as_deref())?,
        package_id: parse_int("packageId", resource.package_id.as_deref())?,
        travel_date: parse_date("travelDate", resource.travel_date.as_deref())?,
        total_members: parse_int("totalMembers", resource.total_members.as_deref())?,
        // Derived by the ticket service from the referenced package.
        total_cost: 0,
    })
}

pub fn ticket_to_request(ticket: &Ticket) -> TicketRequest {
    TicketRequest {
        ticket_id: Some(ticket.ticket_id.to_string()),
        customer_id: Some(ticket.customer_id.to_string()),
        package_id: Some(ticket.package_id.to_string()),
        travel_date: Some(format_date(ticket.travel_date)),
        total_members: Some(ticket.total_members.to_string()),
    }
}

pub fn ticket_to_resource(ticket: &Ticket) -> TicketResource {
    TicketResource {
        ticket_id: ticket.ticket_id.to_string(),
        customer_id: ticket.customer_id.to_string(),
        package_id: ticket.package_id.to_string(),
        travel_date: format_date(ticket.travel_date),
        total_members: ticket.total_members.to_string(),
        total_cost: ticket.total_cost,
    }
}

pub fn ticket_resource_to_entity(resource: &TicketResource) -> Result<Ticket, TravelsError> {
    Ok(Ticket {
        ticket_id: parse_int("ticketId", Some(&resource.ticket_id))?,
        customer_id: parse_int("customerId", Some(&resource.customer_id))?,
        package_id: parse_int("packageId", Some(&resource.package_id))?,
        travel_date: parse_date("travelDate", Some(&resource.travel_date))?,
        total_members: parse_int("totalMembers", Some(&resource.total_members))?,
        total_cost: resource.total_cost,
    })
}

pub fn sign_up_to_customer(resource: &CustomerSignUp) -> Result<Customer, TravelsError> {
    let missing =
        |field: &str| TravelsError::Internal(format!("unvalidated {field} reached the mapper"));
    Ok(Customer {
        customer_id: resource.customer_id.ok_or_else(|| missing("customerId"))?,
        first_name: resource.first_name.clone().ok_or_else(|| missing("firstName"))?,
        last_name: resource.last_name.clone().ok_or_else(|| missing("lastName"))?,
        email: resource.email.clone().ok_or_else(|| missing("email"))?,
        password: resource.password.clone().ok_or_else(|| missing("password"))?,
    })
}

pub fn customer_to_sign_up(customer: &Customer) -> CustomerSignUp {
    CustomerSignUp {
        customer_id: Some(customer.customer_id),
        first_name: Some(customer.first_name.clone()),
        last_name: Some(customer.last_name.clone()),
        email: Some(customer.email.clone()),
        password: Some(customer.password.clone()),
    }
}

/// Details never carry the password back out.
pub fn customer_to_details(customer: &Customer) -> CustomerDetails {
    CustomerDetails {
        customer_id: customer.customer_id,
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.clone(),
    }
}

pub fn package_to_details(package: &Package) -> PackageDetails {
    PackageDetails {
        id: package.id,
        package_name: package.package_name.clone(),
        trip_duration: package.trip_duration.clone(),
        cost_per_person: package.cost_per_person,
    }
}

pub fn details_to_package(details: &PackageDetails) -> Package {
    Package {
        id: details.id,
        package_name: details.package_name.clone(),
        trip_duration: details.trip_duration.clone(),
        cost_per_person: details.cost_per_person,
    }
}

/// Build the joined search projection for one matched ticket.
pub fn search_projection(
    ticket: &Ticket,
    customer: &Customer,
    package: &Package,
) -> SearchTicketResource {
    SearchTicketResource {
        first_name: customer.first_name.clone(),
        last_name: customer.last_name.clone(),
        email: customer.email.clone(),
        package_name: package.package_name.clone(),
        trip_duration: package.trip_duration.clone(),
        travel_date: ticket.travel_date,
        total_members: ticket.total_members,
        total_cost_of_trip: ticket.total_cost,
    }
}

/// Translate validated search criteria into a ticket predicate. Absent
/// fields contribute nothing.
pub fn criteria_to_predicate(criteria: &SearchCriteria) -> Result<TicketPredicate, TravelsError> {
    let mut predicate = TicketPredicate::new();
    if let Some(customer_id) = criteria.customer_id.as_deref().filter(|v| !v.is_empty()) {
        predicate = predicate.customer_id(parse_int("customerId", Some(customer_id))?);
    }
    if let Some(package_id) = criteria.package_id.as_deref().filter(|v| !v.is_empty()) {
        predicate = predicate.package_id(parse_int("packageId", Some(package_id))?);
    }
    if let Some(travel_date) = criteria.travel_date.as_deref().filter(|v| !v.is_empty()) {
        predicate = predicate.travel_date(parse_date("travelDate", Some(travel_date))?);
    }
    Ok(predicate)
}
