use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Router,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{
    error::AppError, extract::JsonOrForm, models::NewTodo, repository::TodoRepository, views,
};

// === App State ===
#[derive(Debug, Clone)]
pub struct AppState {
    pub todos: TodoRepository,
}
impl AppState {
    pub fn new(todos: TodoRepository) -> Self {
        Self { todos }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/clicked", post(clicked))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/toggle/:id", post(toggle_todo))
        .route("/todos/:id", delete(delete_todo))
        .with_state(state)
}

// === Routes ===
// the page itself is empty, the body fetches `/todos` once loaded
async fn root() -> Markup {
    views::shell(html! {})
}

async fn clicked() -> Markup {
    views::clicked()
}

async fn list_todos(State(state): State<AppState>) -> Result<Markup, AppError> {
    let todos = state.todos.list_all()?;
    Ok(views::todo_list(&todos))
}

#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub content: String,
}
async fn create_todo(
    State(state): State<AppState>,
    JsonOrForm(CreateTodo { content }): JsonOrForm<CreateTodo>,
) -> Result<Markup, AppError> {
    let new = NewTodo::new(content)?;
    let todo = state.todos.insert(new)?;
    Ok(views::todo_item(&todo))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Markup, AppError> {
    let todo = state.todos.toggle(id)?;
    Ok(views::todo_item(&todo))
}

// an empty body so the `outerHTML` swap removes the item
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Markup, AppError> {
    state.todos.delete(id)?;
    Ok(html! {})
}
