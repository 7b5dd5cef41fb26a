use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::error::TravelsError;
use crate::resource::{CustomerSignUp, FieldViolation, SearchCriteria, TicketRequest};

// Deliberately permissive: `a@b` is a well-formed address here.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email regex"));

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex"));

const MSG_NOT_NULL: &str = "must not be null";
const MSG_NOT_EMPTY: &str = "must not be empty";
const MSG_EMAIL: &str = "must be a well-formed email address";
const MSG_DATE_FORMAT: &str = "date must be in correct format - yyyy-MM-dd";
const MSG_DATE_PRESENT_OR_FUTURE: &str = "must be a date in the present or in the future";
const MSG_SEARCH_DATE_FORMAT: &str =
    "travel date is in wrong format, correct format is yyyy-mm-dd";
const MSG_SEARCH_NO_CRITERIA: &str = "request body must contain at least one of the following \
     search criteria: customerId, packageId, travelDate";

fn is_blank(value: &Option<String>) -> bool {
    !matches!(value.as_deref(), Some(v) if !v.is_empty())
}

pub fn parse_travel_date(value: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Validate a sign-up body, collecting every failing field in order.
pub fn validate_sign_up(resource: &CustomerSignUp) -> Result<(), TravelsError> {
    let mut violations = Vec::new();

    if resource.customer_id.is_none() {
        violations.push(FieldViolation::new("customerId", MSG_NOT_NULL));
    }
    if is_blank(&resource.first_name) {
        violations.push(FieldViolation::new("firstName", MSG_NOT_EMPTY));
    }
    if is_blank(&resource.last_name) {
        violations.push(FieldViolation::new("lastName", MSG_NOT_EMPTY));
    }
    if is_blank(&resource.password) {
        violations.push(FieldViolation::new("password", MSG_NOT_EMPTY));
    }
    match resource.email.as_deref() {
        None | Some("") => violations.push(FieldViolation::new("email", MSG_NOT_EMPTY)),
        Some(email) if !EMAIL_RE.is_match(email) => {
            violations.push(FieldViolation::new("email", MSG_EMAIL));
        }
        Some(_) => {}
    }

    finish(violations)
}

/// Validate a ticket create/update body. The date rule checks shape first,
/// then the present-or-future boundary against the local calendar.
pub fn validate_ticket_request(resource: &TicketRequest) -> Result<(), TravelsError> {
    let mut violations = Vec::new();

    if is_blank(&resource.ticket_id) {
        violations.push(FieldViolation::new("ticketId", MSG_NOT_EMPTY));
    }
    if is_blank(&resource.customer_id) {
        violations.push(FieldViolation::new("customerId", MSG_NOT_EMPTY));
    }
    if is_blank(&resource.package_id) {
        violations.push(FieldViolation::new("packageId", MSG_NOT_EMPTY));
    }
    match resource.travel_date.as_deref().and_then(parse_travel_date) {
        Some(date) if date < Local::now().date_naive() => {
            violations.push(FieldViolation::new("travelDate", MSG_DATE_PRESENT_OR_FUTURE));
        }
        Some(_) => {}
        None => violations.push(FieldViolation::new("travelDate", MSG_DATE_FORMAT)),
    }
    if is_blank(&resource.total_members) {
        violations.push(FieldViolation::new("totalMembers", MSG_NOT_EMPTY));
    }

    finish(violations)
}

/// Validate a search body: a present travel date must parse, and at least
/// one criterion must be present. The no-criteria case is a request-level
/// failure carrying a single message rather than a field list.
pub fn validate_search_criteria(criteria: &SearchCriteria) -> Result<(), TravelsError> {
    let has_criteria = !is_blank(&criteria.customer_id)
        || !is_blank(&criteria.package_id)
        || !is_blank(&criteria.travel_date);
    if !has_criteria {
        return Err(TravelsError::RequestShape(MSG_SEARCH_NO_CRITERIA.to_string()));
    }

    if let Some(date) = criteria.travel_date.as_deref() {
        if !date.is_empty() && parse_travel_date(date).is_none() {
            return Err(TravelsError::ValidationFailures(vec![FieldViolation::new(
                "travelDate",
                MSG_SEARCH_DATE_FORMAT,
            )]));
        }
    }

    Ok(())
}

fn finish(violations: Vec<FieldViolation>) -> Result<(), TravelsError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(TravelsError::ValidationFailures(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request(travel_date: &str) -> TicketRequest {
        TicketRequest {
            ticket_id: Some("987".to_string()),
            customer_id: Some("123".to_string()),
            package_id: Some("999".to_string()),
            travel_date: Some(travel_date.to_string()),
            total_members: Some("2".to_string()),
        }
    }

    fn violations(err: TravelsError) -> Vec<FieldViolation> {
        match err {
            TravelsError::ValidationFailures(v) => v,
            other => panic!("expected field violations, got {other:?}"),
        }
    }

    #[test]
    fn ticket_request_with_today_is_accepted() {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert!(validate_ticket_request(&valid_request(&today)).is_ok());
    }

    #[test]
    fn ticket_request_with_yesterday_is_rejected() {
        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        let request = valid_request(&yesterday.format("%Y-%m-%d").to_string());

        let v = violations(validate_ticket_request(&request).unwrap_err());
        assert_eq!(
            v,
            vec![FieldViolation::new("travelDate", MSG_DATE_PRESENT_OR_FUTURE)]
        );
    }

    #[test]
    fn ticket_request_with_malformed_date_is_rejected() {
        for bad in ["15-12-2022", "2022/12/15", "2022-13-01", "", "2022-12-150"] {
            let v = violations(validate_ticket_request(&valid_request(bad)).unwrap_err());
            assert_eq!(v, vec![FieldViolation::new("travelDate", MSG_DATE_FORMAT)]);
        }
    }

    #[test]
    fn ticket_request_reports_every_empty_field() {
        let request = TicketRequest::default();
        let v = violations(validate_ticket_request(&request).unwrap_err());
        let fields: Vec<&str> = v.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["ticketId", "customerId", "packageId", "travelDate", "totalMembers"]
        );
    }

    #[test]
    fn sign_up_missing_customer_id_is_null_not_empty() {
        let resource = CustomerSignUp {
            customer_id: None,
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("john@doe.com".to_string()),
            password: Some("secret".to_string()),
        };

        let v = violations(validate_sign_up(&resource).unwrap_err());
        assert_eq!(v, vec![FieldViolation::new("customerId", MSG_NOT_NULL)]);
    }

    #[test]
    fn sign_up_email_rules() {
        let mut resource = CustomerSignUp {
            customer_id: Some(123),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            email: Some("a@b".to_string()),
            password: Some("secret".to_string()),
        };
        assert!(validate_sign_up(&resource).is_ok());

        resource.email = Some("not-an-address".to_string());
        let v = violations(validate_sign_up(&resource).unwrap_err());
        assert_eq!(v, vec![FieldViolation::new("email", MSG_EMAIL)]);

        resource.email = None;
        let v = violations(validate_sign_up(&resource).unwrap_err());
        assert_eq!(v, vec![FieldViolation::new("email", MSG_NOT_EMPTY)]);
    }

    #[test]
    fn search_with_no_criteria_is_a_request_level_failure() {
        let err = validate_search_criteria(&SearchCriteria::default()).unwrap_err();
        match err {
            TravelsError::RequestShape(message) => {
                assert_eq!(message, MSG_SEARCH_NO_CRITERIA);
            }
            other => panic!("expected request shape error, got {other:?}"),
        }
    }

    #[test]
    fn search_with_bad_date_is_a_field_failure() {
        let criteria = SearchCriteria {
            travel_date: Some("15/12/2022".to_string()),
            ..Default::default()
        };
        let v = violations(validate_search_criteria(&criteria).unwrap_err());
        assert_eq!(
            v,
            vec![FieldViolation::new("travelDate", MSG_SEARCH_DATE_FORMAT)]
        );
    }

    #[test]
    fn search_with_single_criterion_is_accepted() {
        let criteria = SearchCriteria {
            customer_id: Some("123".to_string()),
            ..Default::default()
        };
        assert!(validate_search_criteria(&criteria).is_ok());
    }
}
