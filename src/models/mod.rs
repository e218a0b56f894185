use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub content: String,
    pub completed: bool,
}
impl Todo {
    pub fn new(id: u64, new: NewTodo) -> Self {
        Self {
            id,
            content: new.content,
            completed: false,
        }
    }
}

/// Content for a todo that has not been stored yet. Only constructible with
/// non-empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    content: String,
}
impl NewTodo {
    pub fn new(content: impl Into<String>) -> Result<Self, AppError> {
        let content = content.into();
        if content.is_empty() {
            return Err(AppError::Validation("content cannot be empty".into()));
        }
        Ok(Self { content })
    }
}
