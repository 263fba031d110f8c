use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{CreateTeamRequest, TeamResponse, UpdateTeamRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/teams",
    params(
        ("slug" = String, Path, description = "League slug")
    ),
    responses(
        (status = 200, description = "Teams of the league in scheduling order", body = Vec<TeamResponse>),
        (status = 404, description = "League not found")
    ),
    tag = "teams"
)]
pub async fn list_teams(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<TeamResponse>>, WebError> {
    let teams = services::list_teams(db.pool(), &slug).await?;

    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/leagues/{slug}/teams",
    params(
        ("slug" = String, Path, description = "League slug")
    ),
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team registered", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "League not found"),
        (status = 409, description = "Team name already used in this league")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(db.pool(), &slug, &req).await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(team))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(team_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let team = services::get_team(db.pool(), team_id).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated", body = TeamResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "Team name already used in this league")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(db): State<Database>,
    Path(team_id): Path<Uuid>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::update_team(db.pool(), team_id, &req).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found"),
        (status = 409, description = "Team still has scheduled matches")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(db): State<Database>,
    Path(team_id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_team(db.pool(), team_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
