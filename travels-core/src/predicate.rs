use chrono::NaiveDate;

use crate::model::Ticket;

/// Equality constraint on a single ticket column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    CustomerIdEq(i32),
    PackageIdEq(i32),
    TravelDateEq(NaiveDate),
}

/// Conjunction of equality constraints over the ticket table. The ticket
/// repository translates this into a parameterized query; absent criteria
/// contribute no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPredicate {
    constraints: Vec<Constraint>,
}

impl TicketPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customer_id(mut self, id: i32) -> Self {
        self.constraints.push(Constraint::CustomerIdEq(id));
        self
    }

    pub fn package_id(mut self, id: i32) -> Self {
        self.constraints.push(Constraint::PackageIdEq(id));
        self
    }

    pub fn travel_date(mut self, date: NaiveDate) -> Self {
        self.constraints.push(Constraint::TravelDateEq(date));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Evaluate the conjunction against a ticket in memory. Production
    /// search executes in the store; this exists for test doubles and
    /// sanity checks.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.constraints.iter().all(|constraint| match constraint {
            Constraint::CustomerIdEq(id) => ticket.customer_id == *id,
            Constraint::PackageIdEq(id) => ticket.package_id == *id,
            Constraint::TravelDateEq(date) => ticket.travel_date == *date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> Ticket {
        Ticket {
            ticket_id: 987,
            customer_id: 123,
            package_id: 999,
            travel_date: NaiveDate::from_ymd_opt(2022, 12, 15).unwrap(),
            total_members: 2,
            total_cost: 3000,
        }
    }

    #[test]
    fn empty_predicate_matches_everything() {
        let predicate = TicketPredicate::new();
        assert!(predicate.is_empty());
        assert!(predicate.matches(&ticket()));
    }

    #[test]
    fn conjunction_requires_all_constraints() {
        let date = NaiveDate::from_ymd_opt(2022, 12, 15).unwrap();
        let predicate = TicketPredicate::new()
            .customer_id(123)
            .package_id(999)
            .travel_date(date);

        assert!(predicate.matches(&ticket()));

        let other_customer = TicketPredicate::new().customer_id(124).package_id(999);
        assert!(!other_customer.matches(&ticket()));
    }
}
