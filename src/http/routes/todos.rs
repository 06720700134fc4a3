use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::application::todo_service::TodoService;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>).fallback(unmatched))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>).fallback(unmatched))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ListParams { completed: Option<bool> }

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>, params: Result<Query<ListParams>, QueryRejection>) -> Result<Json<Vec<Todo>>, ApiError> {
    let Query(params) = params.map_err(|_| ApiError::invalid_query())?;
    let todos = state.service.list(params.completed).await.map_err(ApiError::internal)?;
    Ok(Json(todos))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    match state.service.get(id).await.map_err(ApiError::internal)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::todo_not_found()),
    }
}

#[derive(Debug, Deserialize)]
struct CreateBody {
    title: Option<String>,
    #[serde(default)]
    completed: bool,
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, payload: Result<Json<CreateBody>, JsonRejection>) -> Result<Json<Todo>, ApiError> {
    let Json(body) = payload.map_err(|_| ApiError::invalid_json())?;
    let title = match body.title {
        Some(title) if !title.is_empty() => title,
        _ => return Err(ApiError::title_required()),
    };
    let todo = state.service.create(CreateTodo { title, completed: body.completed }).await.map_err(ApiError::internal)?;
    Ok(Json(todo))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>, payload: Result<Json<UpdateTodo>, JsonRejection>) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let Json(patch) = payload.map_err(|_| ApiError::invalid_json())?;
    match state.service.update(id, patch).await.map_err(ApiError::internal)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::todo_not_found()),
    }
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = parse_id(&id)?;
    match state.service.delete(id).await.map_err(ApiError::internal)? {
        Some(todo) => Ok(Json(json!({ "message": "Todo deleted", "todo": todo }))),
        None => Err(ApiError::todo_not_found()),
    }
}

// Any method the route tables above do not list, e.g. PATCH /todos.
async fn unmatched() -> ApiError { ApiError::route_not_found() }

fn parse_id(s: &str) -> Result<TodoId, ApiError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::invalid_id());
    }
    s.parse::<u64>().map(TodoId).map_err(|_| ApiError::invalid_id())
}
