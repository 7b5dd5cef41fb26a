use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{get, put},
    Router,
};

use travels_core::resource::{CustomerDetails, CustomerSignUp};
use travels_core::{mapper, validate};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(get_customers))
        .route("/customers/signup", put(sign_up))
        .route("/customers/{id}", get(get_customer_by_id).delete(delete_customer))
}

async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerDetails>>, AppError> {
    let customers = state.customers.list().await?;
    Ok(Json(customers.iter().map(mapper::customer_to_details).collect()))
}

async fn get_customer_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerDetails>, AppError> {
    let customer = state.customers.get_by_id(id).await?;
    Ok(Json(mapper::customer_to_details(&customer)))
}

async fn sign_up(
    State(state): State<AppState>,
    Json(resource): Json<CustomerSignUp>,
) -> Result<Json<CustomerSignUp>, AppError> {
    validate::validate_sign_up(&resource)?;
    let customer = mapper::sign_up_to_customer(&resource)?;
    let saved = state.customers.sign_up(customer).await?;
    Ok(Json(mapper::customer_to_sign_up(&saved)))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.customers.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
