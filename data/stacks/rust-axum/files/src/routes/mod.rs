pub mod items;

use axum::Router;

pub fn router() -> Router {
    Router::new().nest("/api/items", items::router())
}
