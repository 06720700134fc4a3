use thiserror::Error;

use super::todo::{CreateTodo, Todo, TodoId, UpdateTodo};

#[derive(Debug, Error)]
#[error("todo id space is exhausted")]
pub struct IdsExhausted;

pub fn filtered(todos: &[Todo], completed: Option<bool>) -> Vec<Todo> {
    match completed {
        Some(flag) => todos.iter().filter(|t| t.completed == flag).cloned().collect(),
        None => todos.to_vec(),
    }
}

pub fn find(todos: &[Todo], id: TodoId) -> Option<&Todo> {
    todos.iter().find(|t| t.id == id)
}

// max + 1, so deleting the highest-id todo frees that id for reuse while
// earlier gaps stay unused. None when the max id is already u64::MAX.
pub fn next_id(todos: &[Todo]) -> Option<TodoId> {
    match todos.iter().map(|t| t.id.0).max() {
        Some(max) => max.checked_add(1).map(TodoId),
        None => Some(TodoId(1)),
    }
}

pub fn insert(todos: &mut Vec<Todo>, input: CreateTodo) -> Result<Todo, IdsExhausted> {
    let todo = Todo {
        id: next_id(todos).ok_or(IdsExhausted)?,
        title: input.title,
        completed: input.completed,
    };
    todos.push(todo.clone());
    Ok(todo)
}

// Shallow merge: only the fields present in the patch overwrite the stored todo.
pub fn apply_patch(todos: &mut [Todo], id: TodoId, patch: UpdateTodo) -> Option<Todo> {
    let todo = todos.iter_mut().find(|t| t.id == id)?;
    if let Some(title) = patch.title { todo.title = title; }
    if let Some(completed) = patch.completed { todo.completed = completed; }
    Some(todo.clone())
}

pub fn remove(todos: &mut Vec<Todo>, id: TodoId) -> Option<Todo> {
    let index = todos.iter().position(|t| t.id == id)?;
    Some(todos.remove(index))
}
