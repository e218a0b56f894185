use crate::{
    db::{Db, Table},
    error::AppError,
    models::{NewTodo, Todo},
};

pub const TODOS_TABLE: &str = "todos";

/// Data access for todos. Cheap to clone; every clone shares the same
/// underlying table.
#[derive(Debug, Clone)]
pub struct TodoRepository {
    table: Table,
}
impl TodoRepository {
    pub fn new(db: &Db) -> Result<Self, AppError> {
        let table = db.table(TODOS_TABLE)?;
        Ok(Self { table })
    }

    /// All todos in ascending id order, which is creation order.
    pub fn list_all(&self) -> Result<Vec<Todo>, AppError> {
        let todos = self
            .table
            .iter::<Todo>()
            .map(|row| row.map(|(_, todo)| todo))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(todos)
    }

    pub fn get_by_id(&self, id: u64) -> Result<Option<Todo>, AppError> {
        Ok(self.table.get(id)?)
    }

    pub fn insert(&self, new: NewTodo) -> Result<Todo, AppError> {
        let id = self.table.next_id()?;
        let todo = Todo::new(id, new);
        self.table.insert(id, &todo)?;
        tracing::debug!(id, "inserted todo");
        Ok(todo)
    }

    pub fn toggle(&self, id: u64) -> Result<Todo, AppError> {
        let todo = self
            .table
            .update(id, |mut todo: Todo| {
                todo.completed = !todo.completed;
                todo
            })?
            .ok_or(AppError::NotFound(id))?;
        tracing::debug!(id, completed = todo.completed, "toggled todo");
        Ok(todo)
    }

    /// Deleting an id that does not exist is not an error.
    pub fn delete(&self, id: u64) -> Result<(), AppError> {
        let existed = self.table.remove(id)?;
        tracing::debug!(id, existed, "deleted todo");
        Ok(())
    }
}
