use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    advance_gameday, create_season, extend_season, get_season, list_seasons, set_primary_season,
};

pub fn league_routes() -> Router<Database> {
    Router::new().route("/:slug/seasons", get(list_seasons).post(create_season))
}

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/:season_id", get(get_season))
        .route("/:season_id/fixtures", post(extend_season))
        .route("/:season_id/primary", post(set_primary_season))
        .route("/:season_id/advance", post(advance_gameday))
}
