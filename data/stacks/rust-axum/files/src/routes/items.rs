use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

async fn list_items() -> Json<Vec<Item>> {
    Json(Vec::new())
}

pub fn router() -> Router {
    Router::new().route("/", get(list_items))
}
