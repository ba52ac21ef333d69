//! In-process fake of the catalogue service.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};

pub const PAGE_SIZE: usize = 2;

#[derive(Clone)]
struct CatalogueState {
    movies: Arc<Vec<Value>>,
    searches: Arc<Mutex<Vec<(String, u32)>>>,
}

pub struct FakeCatalogue {
    pub base_url: String,
    searches: Arc<Mutex<Vec<(String, u32)>>>,
}

impl FakeCatalogue {
    pub fn searches(&self) -> Vec<(String, u32)> {
        self.searches.lock().expect("lock poisoned").clone()
    }
}

pub fn movies() -> Vec<Value> {
    vec![
        json!({
            "id": 5,
            "name": "The Matrix",
            "year": 1999,
            "rating": 8.7,
            "thumbnailUrl": "matrix-thumb.jpg",
            "genres": "[\"Action\",\"Sci-Fi\"]",
            "actors": "[\"Keanu Reeves\"]",
            "directors": "not json"
        }),
        json!({ "id": 6, "name": "The Matrix Reloaded", "year": 2003 }),
        json!({ "id": 7, "name": "The Matrix Revolutions", "year": 2003 }),
        json!({ "id": 8, "name": "Heat", "imageUrl": "heat.jpg" }),
    ]
}

async fn search(
    State(state): State<CatalogueState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let text = params.get("searchText").cloned().unwrap_or_default();
    let page: u32 = params
        .get("page")
        .and_then(|page| page.parse().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    state
        .searches
        .lock()
        .expect("lock poisoned")
        .push((text.clone(), page));

    let needle = text.to_lowercase();
    let matches: Vec<Value> = state
        .movies
        .iter()
        .filter(|movie| {
            movie["name"]
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    let start = page as usize * PAGE_SIZE;
    let content: Vec<Value> =
        matches.iter().skip(start).take(PAGE_SIZE).cloned().collect();
    let last = start + PAGE_SIZE >= matches.len();

    Ok(Json(json!({ "content": content, "last": last })))
}

async fn detail(
    State(state): State<CatalogueState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, StatusCode> {
    state
        .movies
        .iter()
        .find(|movie| movie["id"].as_i64() == Some(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn broken() -> &'static str {
    "{ not json"
}

pub async fn spawn_catalogue() -> FakeCatalogue {
    let searches = Arc::new(Mutex::new(Vec::new()));
    let state = CatalogueState {
        movies: Arc::new(movies()),
        searches: Arc::clone(&searches),
    };
    let router = Router::new()
        .route("/api/movies/searchPaginated", get(search))
        .route("/api/movies/{id}", get(detail))
        .route("/broken/api/movies/searchPaginated", get(broken))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake catalogue");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve fake catalogue");
    });

    FakeCatalogue {
        base_url: format!("http://{addr}"),
        searches,
    }
}
