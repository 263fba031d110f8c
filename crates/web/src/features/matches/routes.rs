use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_match, list_matches, update_match};

pub fn season_routes() -> Router<Database> {
    Router::new().route("/:season_id/matches", get(list_matches))
}

pub fn routes() -> Router<Database> {
    Router::new().route("/:match_id", get(get_match).put(update_match))
}
