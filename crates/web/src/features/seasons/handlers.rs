use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::season::{
        CreateSeasonRequest, ExtendSeasonRequest, ScheduledSeasonResponse, SeasonResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leagues/{slug}/seasons",
    params(
        ("slug" = String, Path, description = "League slug")
    ),
    responses(
        (status = 200, description = "Seasons of the league, newest first", body = Vec<SeasonResponse>),
        (status = 404, description = "League not found")
    ),
    tag = "seasons"
)]
pub async fn list_seasons(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<SeasonResponse>>, WebError> {
    let seasons = services::list_seasons(db.pool(), &slug).await?;

    Ok(Json(seasons.into_iter().map(SeasonResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/leagues/{slug}/seasons",
    params(
        ("slug" = String, Path, description = "League slug")
    ),
    request_body = CreateSeasonRequest,
    responses(
        (status = 201, description = "Season created and all fixtures scheduled", body = ScheduledSeasonResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "League not found"),
        (status = 422, description = "League has fewer than two teams")
    ),
    tag = "seasons"
)]
pub async fn create_season(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Json(req): Json<CreateSeasonRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let scheduled = services::create_season(db.pool(), &slug, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduledSeasonResponse::from(scheduled)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/seasons/{season_id}",
    params(
        ("season_id" = Uuid, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Season found", body = SeasonResponse),
        (status = 404, description = "Season not found")
    ),
    tag = "seasons"
)]
pub async fn get_season(
    State(db): State<Database>,
    Path(season_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let season = services::get_season(db.pool(), season_id).await?;

    Ok(Json(SeasonResponse::from(season)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/seasons/{season_id}/fixtures",
    params(
        ("season_id" = Uuid, Path, description = "Season ID")
    ),
    request_body = ExtendSeasonRequest,
    responses(
        (status = 201, description = "Additional fixtures scheduled after the last gameday", body = ScheduledSeasonResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Season not found"),
        (status = 422, description = "League has fewer than two teams")
    ),
    tag = "seasons"
)]
pub async fn extend_season(
    State(db): State<Database>,
    Path(season_id): Path<Uuid>,
    Json(req): Json<ExtendSeasonRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let scheduled = services::extend_season(db.pool(), season_id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduledSeasonResponse::from(scheduled)),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/seasons/{season_id}/primary",
    params(
        ("season_id" = Uuid, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Season is now the league's primary season", body = SeasonResponse),
        (status = 404, description = "Season not found")
    ),
    tag = "seasons"
)]
pub async fn set_primary_season(
    State(db): State<Database>,
    Path(season_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let season = services::set_primary_season(db.pool(), season_id).await?;

    Ok(Json(SeasonResponse::from(season)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/seasons/{season_id}/advance",
    params(
        ("season_id" = Uuid, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Current gameday moved forward by one", body = SeasonResponse),
        (status = 404, description = "Season not found"),
        (status = 409, description = "Season is already at its last scheduled gameday")
    ),
    tag = "seasons"
)]
pub async fn advance_gameday(
    State(db): State<Database>,
    Path(season_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let season = services::advance_gameday(db.pool(), season_id).await?;

    Ok(Json(SeasonResponse::from(season)).into_response())
}
