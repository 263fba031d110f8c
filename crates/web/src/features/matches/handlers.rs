use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        game::{MatchListQuery, MatchResponse, UpdateMatchRequest},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons/{season_id}/matches",
    params(
        ("season_id" = Uuid, Path, description = "Season ID"),
        MatchListQuery
    ),
    responses(
        (status = 200, description = "Fixtures ordered by gameday", body = PaginatedResponse<MatchResponse>),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 404, description = "Season not found")
    ),
    tag = "matches"
)]
pub async fn list_matches(
    State(db): State<Database>,
    Path(season_id): Path<Uuid>,
    Query(query): Query<MatchListQuery>,
) -> Result<Response, WebError> {
    let pagination = query.pagination();
    pagination.validate().map_err(WebError::BadRequest)?;

    let (matches, total_items) = services::list_matches(db.pool(), season_id, &query).await?;

    let data: Vec<MatchResponse> = matches.into_iter().map(MatchResponse::from).collect();

    Ok(Json(PaginatedResponse::new(
        data,
        pagination.page,
        pagination.page_size,
        total_items,
    ))
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{match_id}",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match found", body = MatchResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let game = services::get_match(db.pool(), match_id).await?;

    Ok(Json(MatchResponse::from(game)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{match_id}",
    params(
        ("match_id" = Uuid, Path, description = "Match ID")
    ),
    request_body = UpdateMatchRequest,
    responses(
        (status = 200, description = "Match updated", body = MatchResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn update_match(
    State(db): State<Database>,
    Path(match_id): Path<Uuid>,
    Json(req): Json<UpdateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let game = services::update_match(db.pool(), match_id, &req).await?;

    Ok(Json(MatchResponse::from(game)).into_response())
}
