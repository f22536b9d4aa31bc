//! Founder points ledger handlers

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use fargoat_core::{
    AllocatePoints, ClaimRewards, Contract, ContractPayload, ConvertPoints, DistributePoints,
    Founder, FounderPayload, Transfer,
};
use tracing::info;

pub async fn create_founder(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<FounderPayload>,
) -> Result<(StatusCode, Json<Founder>), ApiError> {
    info!("Creating founder: {}", payload.founder_name);

    let founder = state
        .store
        .create_founder(payload)
        .await
        .map_err(|e| ApiError::from_store(e, "create founder"))?;
    Ok((StatusCode::CREATED, Json(founder)))
}

pub async fn get_founder(
    State(state): State<AppState>,
    Path(founder_name): Path<String>,
) -> Result<Json<Founder>, ApiError> {
    let founder = state
        .store
        .get_founder(&founder_name)
        .await
        .map_err(|e| ApiError::from_store(e, "retrieve founder"))?;
    Ok(Json(founder))
}

pub async fn allocate_points(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<AllocatePoints>,
) -> Result<Json<Founder>, ApiError> {
    info!("Allocating {} points to {}", req.points, req.founder_name);

    let founder = state
        .store
        .allocate_points(&req.founder_name, req.points)
        .await
        .map_err(|e| ApiError::from_store(e, "allocate points"))?;
    Ok(Json(founder))
}

pub async fn register_contract(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<ContractPayload>,
) -> Result<(StatusCode, Json<Contract>), ApiError> {
    info!("Registering contract: {}", payload.contract_address);

    let contract = state
        .store
        .register_contract(payload)
        .await
        .map_err(|e| ApiError::from_store(e, "register contract"))?;
    Ok((StatusCode::CREATED, Json(contract)))
}

pub async fn get_contract(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
) -> Result<Json<Contract>, ApiError> {
    let contract = state
        .store
        .get_contract(&contract_address)
        .await
        .map_err(|e| ApiError::from_store(e, "retrieve contract"))?;
    Ok(Json(contract))
}

pub async fn distribute_points(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<DistributePoints>,
) -> Result<Json<Transfer>, ApiError> {
    info!(
        "Distributing {} points from {} to {}",
        req.points, req.founder_name, req.contract_address
    );

    let transfer = state
        .store
        .distribute_points(&req.founder_name, &req.contract_address, req.points)
        .await
        .map_err(|e| ApiError::from_store(e, "distribute points"))?;
    Ok(Json(transfer))
}

pub async fn convert_points(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ConvertPoints>,
) -> Result<Json<Contract>, ApiError> {
    let contract = state
        .store
        .convert_points(&req.contract_address, req.points_to_convert)
        .await
        .map_err(|e| ApiError::from_store(e, "convert points"))?;

    info!(
        "Converted {} points on {}, {} rewards pending",
        req.points_to_convert, contract.contract_address, contract.pending_rewards
    );
    Ok(Json(contract))
}

pub async fn claim_rewards(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ClaimRewards>,
) -> Result<Json<Transfer>, ApiError> {
    let transfer = state
        .store
        .claim_rewards(&req.founder_name, &req.contract_address)
        .await
        .map_err(|e| ApiError::from_store(e, "claim rewards"))?;

    info!(
        "{} claimed rewards from {}, total earned {}",
        req.founder_name, req.contract_address, transfer.founder.earned_rewards
    );
    Ok(Json(transfer))
}
