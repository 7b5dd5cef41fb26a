use axum::{
    extract::{Json, Path, State},
    routing::get,
    Router,
};

use travels_core::mapper;
use travels_core::resource::PackageDetails;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(get_packages).post(add_package))
        .route("/packages/{id}", get(get_package_by_id))
}

async fn get_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<PackageDetails>>, AppError> {
    let packages = state.packages.list().await?;
    Ok(Json(packages.iter().map(mapper::package_to_details).collect()))
}

async fn get_package_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PackageDetails>, AppError> {
    let package = state.packages.get_by_id(id).await?;
    Ok(Json(mapper::package_to_details(&package)))
}

async fn add_package(
    State(state): State<AppState>,
    Json(details): Json<PackageDetails>,
) -> Result<Json<PackageDetails>, AppError> {
    let package = state.packages.add(mapper::details_to_package(&details)).await?;
    Ok(Json(mapper::package_to_details(&package)))
}
