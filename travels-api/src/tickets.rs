use axum::{
    extract::{Json, Path, State},
    routing::{delete, get, post, put},
    Router,
};

use travels_core::resource::{SearchCriteria, SearchTicketResource, TicketRefund, TicketRequest, TicketResource};
use travels_core::{mapper, validate};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", get(get_tickets))
        .route("/tickets/create", put(create_ticket))
        .route("/tickets/update", put(update_ticket))
        .route("/tickets/search", post(search_tickets))
        .route("/tickets/{id}", delete(delete_ticket))
}

async fn get_tickets(
    State(state): State<AppState>,
) -> Result<Json<Vec<TicketResource>>, AppError> {
    let tickets = state.tickets.ticket_entities().await?;
    Ok(Json(tickets.iter().map(mapper::ticket_to_resource).collect()))
}

// PUT by source convention: a colliding ticketId overwrites without warning.
async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<TicketRequest>,
) -> Result<Json<TicketRequest>, AppError> {
    validate::validate_ticket_request(&request)?;
    let ticket = mapper::ticket_request_to_entity(&request)?;
    let created = state.tickets.create_ticket(ticket).await?;
    Ok(Json(mapper::ticket_to_request(&created)))
}

async fn update_ticket(
    State(state): State<AppState>,
    Json(request): Json<TicketRequest>,
) -> Result<Json<TicketRequest>, AppError> {
    validate::validate_ticket_request(&request)?;
    let ticket = mapper::ticket_request_to_entity(&request)?;
    let updated = state.tickets.update_ticket_by_id(ticket).await?;
    Ok(Json(mapper::ticket_to_request(&updated)))
}

async fn search_tickets(
    State(state): State<AppState>,
    Json(criteria): Json<SearchCriteria>,
) -> Result<Json<Vec<SearchTicketResource>>, AppError> {
    validate::validate_search_criteria(&criteria)?;
    let predicate = mapper::criteria_to_predicate(&criteria)?;
    let results = state.tickets.search(&predicate).await?;
    Ok(Json(results))
}

async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TicketRefund>, AppError> {
    let refund = state.tickets.delete_ticket(id).await?;
    Ok(Json(refund))
}
