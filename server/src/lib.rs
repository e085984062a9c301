use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Path, Query, Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

use tinytodo_core::{CreateTodo, Todo, TodoService, UpdateTodo};

use crate::error::ApiError;

pub mod error;
pub mod logging;

/// Shared handle to the service. Mutating service methods take `&mut self`,
/// so handlers must hold the write half for a whole read-modify-write cycle.
pub type Db = Arc<RwLock<TodoService>>;

pub fn app(service: TodoService) -> Router {
    let db: Db = Arc::new(RwLock::new(service));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/search", get(search_todos))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .layer(middleware::from_fn(access_log))
        .with_state(db)
}

pub async fn run(listener: TcpListener, service: TodoService) -> Result<(), std::io::Error> {
    axum::serve(
        listener,
        app(service).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl-C handler");
}

/// Emits one line per request on the `access` target:
/// `<client> - "<METHOD> <path> HTTP/1.1" <status> <seconds>s`.
/// The client address comes from `ConnectInfo` and is `-` when the router
/// is driven without a real connection, as in tests.
async fn access_log(req: Request, next: Next) -> Response {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(req).await;

    tracing::info!(
        target: "access",
        "{} - \"{} {} HTTP/1.1\" {} {:.3}s",
        client,
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

async fn list_todos(State(db): State<Db>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = db.read().await.list_all()?;
    Ok(Json(todos))
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<Json<Todo>, ApiError> {
    if input.title.is_empty() {
        return Err(ApiError::Validation("title must not be empty".to_string()));
    }
    let todo = db.write().await.create(input)?;
    Ok(Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(patch): Json<UpdateTodo>,
) -> Result<Json<Todo>, ApiError> {
    let todo = db.write().await.update(id, patch)?;
    Ok(Json(todo))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Value>, ApiError> {
    db.write().await.delete(id)?;
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}

async fn search_todos(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::Validation(
            "query parameter `q` must not be empty".to_string(),
        ));
    }
    let todos = db.read().await.search(&query)?;
    Ok(Json(todos))
}
