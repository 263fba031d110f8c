use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_league, delete_league, get_league, list_leagues};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_leagues).post(create_league))
        .route("/:slug", get(get_league).delete(delete_league))
}
