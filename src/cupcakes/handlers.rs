use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{error::AppError, state::AppState};

use super::dto::{
    CreateCupcakeRequest, CupcakeListResponse, CupcakeResponse, DeletedResponse,
    UpdateCupcakeRequest,
};
use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cupcakes", get(list_cupcakes).post(create_cupcake))
        .route(
            "/cupcakes/:id",
            get(get_cupcake).patch(update_cupcake).delete(delete_cupcake),
        )
}

fn not_found(id: i32) -> AppError {
    warn!(%id, "cupcake not found");
    AppError::NotFound(format!("cupcake {id}"))
}

/// GET /cupcakes
#[instrument(skip(state))]
pub async fn list_cupcakes(
    State(state): State<AppState>,
) -> Result<Json<CupcakeListResponse>, AppError> {
    let cupcakes = repo::list_all(&state.db).await?;
    Ok(Json(CupcakeListResponse { cupcakes }))
}

/// GET /cupcakes/:id
#[instrument(skip(state))]
pub async fn get_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CupcakeResponse>, AppError> {
    let cupcake = repo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(CupcakeResponse { cupcake }))
}

/// POST /cupcakes { flavor, size, rating, image }
#[instrument(skip(state, body))]
pub async fn create_cupcake(
    State(state): State<AppState>,
    Json(body): Json<CreateCupcakeRequest>,
) -> Result<(StatusCode, Json<CupcakeResponse>), AppError> {
    let cupcake = repo::create(&state.db, &body).await?;
    info!(id = cupcake.id, flavor = %cupcake.flavor, "cupcake created");
    Ok((StatusCode::CREATED, Json(CupcakeResponse { cupcake })))
}

/// PATCH /cupcakes/:id, any subset of the fields
#[instrument(skip(state, body))]
pub async fn update_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateCupcakeRequest>,
) -> Result<Json<CupcakeResponse>, AppError> {
    let cupcake = repo::update(&state.db, id, &body)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!(%id, "cupcake updated");
    Ok(Json(CupcakeResponse { cupcake }))
}

/// DELETE /cupcakes/:id
#[instrument(skip(state))]
pub async fn delete_cupcake(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !repo::delete(&state.db, id).await? {
        return Err(not_found(id));
    }
    info!(%id, "cupcake deleted");
    Ok(Json(DeletedResponse { message: "Deleted" }))
}
