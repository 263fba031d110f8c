use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::league::{CreateLeagueRequest, LeagueResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leagues",
    responses(
        (status = 200, description = "List all leagues", body = Vec<LeagueResponse>)
    ),
    tag = "leagues"
)]
pub async fn list_leagues(
    State(db): State<Database>,
) -> Result<Json<Vec<LeagueResponse>>, WebError> {
    let leagues = services::list_leagues(db.pool()).await?;

    let response: Vec<LeagueResponse> = leagues.into_iter().map(LeagueResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/leagues/{slug}",
    params(
        ("slug" = String, Path, description = "League slug")
    ),
    responses(
        (status = 200, description = "League found", body = LeagueResponse),
        (status = 404, description = "League not found")
    ),
    tag = "leagues"
)]
pub async fn get_league(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let league = services::get_league_by_slug(db.pool(), &slug).await?;

    Ok(Json(LeagueResponse::from(league)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leagues",
    request_body = CreateLeagueRequest,
    responses(
        (status = 201, description = "League created successfully", body = LeagueResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "leagues"
)]
pub async fn create_league(
    State(db): State<Database>,
    Json(req): Json<CreateLeagueRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let league = services::create_league(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(LeagueResponse::from(league))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/leagues/{slug}",
    params(
        ("slug" = String, Path, description = "League slug")
    ),
    responses(
        (status = 204, description = "League deleted with its teams, seasons and matches"),
        (status = 404, description = "League not found")
    ),
    tag = "leagues"
)]
pub async fn delete_league(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    services::delete_league(db.pool(), &slug).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
